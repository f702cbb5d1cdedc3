//! # Site Content
//!
//! Static, read-only catalogs rendered by the pages: services, hours,
//! contact details, team, testimonials. Nothing here is mutated at runtime.

/// A bookable service. Prices are stored in whole cents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Service {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub price_cents: u32,
    pub duration_minutes: u32,
    pub featured: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TeamMember {
    pub name: &'static str,
    pub role: &'static str,
    pub bio: &'static str,
    pub specialties: &'static [&'static str],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Testimonial {
    pub author: &'static str,
    pub quote: &'static str,
    /// 1..=5
    pub rating: u8,
}

/// Opening hours for one day, as whole 24h hours. `None` means closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BusinessHours {
    pub day: &'static str,
    pub open: Option<(u32, u32)>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContactInfo {
    pub business_name: &'static str,
    pub phone: &'static str,
    pub email: &'static str,
    pub street: &'static str,
    pub city: &'static str,
    pub region: &'static str,
    pub postal_code: &'static str,
    pub country: &'static str,
    pub website: &'static str,
    pub instagram: &'static str,
}

pub const CONTACT: ContactInfo = ContactInfo {
    business_name: "Sharp Corner Barbershop",
    phone: "(555) 123-4567",
    email: "hello@sharpcornerbarbers.com",
    street: "214 Market Street",
    city: "Springfield",
    region: "IL",
    postal_code: "62701",
    country: "US",
    website: "https://sharpcornerbarbers.com",
    instagram: "@sharpcornerbarbers",
};

/// Hosted booking calendar. The cart id is baked into the URL.
pub const BOOKING_URL: &str =
    "https://booking.sharpcornerbarbers.com/calendar?cart=sc-7f3a21";

pub const SERVICES: &[Service] = &[
    Service {
        id: "classic-cut",
        name: "Classic Cut",
        description: "Scissor or clipper cut, hot towel finish and style.",
        price_cents: 3000,
        duration_minutes: 30,
        featured: true,
    },
    Service {
        id: "skin-fade",
        name: "Skin Fade",
        description: "Precision fade down to the skin, blended by hand.",
        price_cents: 3500,
        duration_minutes: 45,
        featured: true,
    },
    Service {
        id: "beard-trim",
        name: "Beard Trim & Shape",
        description: "Line-up, shape and conditioning oil.",
        price_cents: 2000,
        duration_minutes: 20,
        featured: false,
    },
    Service {
        id: "hot-towel-shave",
        name: "Hot Towel Shave",
        description: "Straight razor shave with hot and cold towels.",
        price_cents: 4000,
        duration_minutes: 45,
        featured: true,
    },
    Service {
        id: "cut-and-beard",
        name: "Cut & Beard Combo",
        description: "Any haircut plus a full beard trim.",
        price_cents: 5000,
        duration_minutes: 60,
        featured: false,
    },
    Service {
        id: "the-works",
        name: "The Works",
        description: "Cut, shave, facial and scalp massage.",
        price_cents: 8550,
        duration_minutes: 90,
        featured: false,
    },
    Service {
        id: "kids-cut",
        name: "Kids Cut (12 & under)",
        description: "Patient, friendly cuts for the little ones.",
        price_cents: 2000,
        duration_minutes: 25,
        featured: false,
    },
];

pub const HOURS: &[BusinessHours] = &[
    BusinessHours { day: "Monday", open: None },
    BusinessHours { day: "Tuesday", open: Some((9, 19)) },
    BusinessHours { day: "Wednesday", open: Some((9, 19)) },
    BusinessHours { day: "Thursday", open: Some((9, 20)) },
    BusinessHours { day: "Friday", open: Some((9, 20)) },
    BusinessHours { day: "Saturday", open: Some((8, 17)) },
    BusinessHours { day: "Sunday", open: Some((10, 15)) },
];

pub const TEAM: &[TeamMember] = &[
    TeamMember {
        name: "Marcus Reed",
        role: "Owner & Master Barber",
        bio: "Twenty years behind the chair and still learning.",
        specialties: &["Classic cuts", "Straight razor shaves"],
    },
    TeamMember {
        name: "Dani Okafor",
        role: "Senior Barber",
        bio: "Fades so clean they should come with a warning.",
        specialties: &["Skin fades", "Designs"],
    },
    TeamMember {
        name: "Luis Ortega",
        role: "Barber",
        bio: "Beard whisperer and coffee enthusiast.",
        specialties: &["Beard sculpting", "Kids cuts"],
    },
];

pub const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        author: "James T.",
        quote: "Best fade in town. Booking took thirty seconds.",
        rating: 5,
    },
    Testimonial {
        author: "Priya S.",
        quote: "Took my son here for his first cut. They were fantastic with him.",
        rating: 5,
    },
    Testimonial {
        author: "Alex M.",
        quote: "The hot towel shave is worth every penny.",
        rating: 4,
    },
];

pub const HERO_MARKDOWN: &str = "\
# Sharp Corner Barbershop

**Classic craft. Modern cuts.** Walk in looking good, walk out looking sharp.

Press `Ctrl+B` to book your chair.";

pub const ABOUT_MARKDOWN: &str = "\
## Our Story

Sharp Corner opened in 2009 as a two-chair shop on Market Street. We still \
believe a good cut starts with a good conversation.

- Licensed, experienced barbers
- Hot towels with every service
- Walk-ins welcome, bookings preferred";

/// Hours for a weekday, Monday = 0.
pub fn hours_for(weekday_from_monday: u32) -> Option<(u32, u32)> {
    HOURS.get(weekday_from_monday as usize).and_then(|h| h.open)
}

pub fn featured_services() -> impl Iterator<Item = &'static Service> {
    SERVICES.iter().filter(|s| s.featured)
}

pub fn service_by_id(id: &str) -> Option<&'static Service> {
    SERVICES.iter().find(|s| s.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn service_ids_are_unique() {
        for (i, a) in SERVICES.iter().enumerate() {
            assert!(
                SERVICES.iter().skip(i + 1).all(|b| b.id != a.id),
                "duplicate service id {}",
                a.id
            );
        }
    }

    #[test]
    fn featured_services_are_a_subset() {
        let featured: Vec<_> = featured_services().map(|s| s.id).collect();
        assert_eq!(featured, vec!["classic-cut", "skin-fade", "hot-towel-shave"]);
    }

    #[test]
    fn hours_cover_the_week() {
        assert_eq!(HOURS.len(), 7);
        assert!(HOURS[0].open.is_none());
        assert!(HOURS.iter().flat_map(|h| h.open).all(|(o, c)| o < c && c <= 24));
        assert_eq!(hours_for(5), Some((8, 17)));
        assert_eq!(hours_for(9), None);
    }

    #[test]
    fn ratings_in_range() {
        assert!(TESTIMONIALS.iter().all(|t| (1..=5).contains(&t.rating)));
    }

    #[test]
    fn lookup_by_id() {
        assert_eq!(service_by_id("skin-fade").map(|s| s.price_cents), Some(3500));
        assert!(service_by_id("perm").is_none());
    }
}
