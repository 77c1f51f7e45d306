//! Flight Offers
//!
//! Fixed sample records shown beside the bucket list. Never fetched.

/// Carrier shown on a flight card
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Airline {
    pub name: &'static str,
    pub logo: &'static str,
}

/// Emissions estimate in kg CO2e and its change against typical routes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Emissions {
    pub kg: u32,
    pub change_percent: i32,
}

impl Emissions {
    /// e.g. `+14% emissions` or `-21% emissions`
    pub fn label(&self) -> String {
        format!("{:+}% emissions", self.change_percent)
    }

    pub fn is_above_typical(&self) -> bool {
        self.change_percent > 0
    }
}

/// A static sample flight offer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlightOffer {
    pub airline: Airline,
    pub time: &'static str,
    pub duration: &'static str,
    pub emissions: Emissions,
    /// Whole US dollars
    pub price: u32,
    pub details: &'static [&'static str],
}

impl FlightOffer {
    pub fn price_label(&self) -> String {
        format!("${}", self.price)
    }
}

const STANDARD_DETAILS: &[&str] = &["Boeing 737", "Extra legroom", "In-flight entertainment"];

pub static SAMPLE_OFFERS: &[FlightOffer] = &[
    FlightOffer {
        airline: Airline {
            name: "Alaska Airlines",
            logo: "https://m.media-amazon.com/images/I/51f3uYGjenL._h1_.png",
        },
        time: "1:26 PM - 9:30 PM",
        duration: "5 hr 4 min",
        emissions: Emissions { kg: 368, change_percent: 14 },
        price: 605,
        details: &["Boeing 737", "Meal included", "Free Wi-Fi available"],
    },
    FlightOffer {
        airline: Airline {
            name: "United Airlines",
            logo: "https://ih1.redbubble.net/image.4826145001.4783/raf,360x360,075,t,fafafa:ca443f4786.jpg",
        },
        time: "6:45 AM - 2:59 PM",
        duration: "5 hr 14 min",
        emissions: Emissions { kg: 254, change_percent: -21 },
        price: 613,
        details: STANDARD_DETAILS,
    },
    FlightOffer {
        airline: Airline {
            name: "Delta Airlines",
            logo: "https://encrypted-tbn0.gstatic.com/images?q=tbn:ANd9GcRDG3mx0ouDRNS5kGnGS6SxoO8r9nO369SBKw&s",
        },
        time: "6:45 AM - 2:59 PM",
        duration: "5 hr 14 min",
        emissions: Emissions { kg: 254, change_percent: -21 },
        price: 613,
        details: STANDARD_DETAILS,
    },
    FlightOffer {
        airline: Airline {
            name: "American Airlines",
            logo: "https://external-preview.redd.it/noGVmHkGp3tV46SVyR3TSndGMlFp-2Vf3uLBm9UUZlY.png?auto=webp&s=fd18075339f5cf34ee0a7512ede6476c619a21cb",
        },
        time: "6:45 AM - 2:59 PM",
        duration: "5 hr 14 min",
        emissions: Emissions { kg: 368, change_percent: 14 },
        price: 613,
        details: STANDARD_DETAILS,
    },
    FlightOffer {
        airline: Airline {
            name: "Spirit Airlines",
            logo: "https://i.etsystatic.com/11453548/r/il/8ec664/1689755000/il_570xN.1689755000_9e6k.jpg",
        },
        time: "6:45 AM - 2:59 PM",
        duration: "5 hr 14 min",
        emissions: Emissions { kg: 254, change_percent: -21 },
        price: 613,
        details: STANDARD_DETAILS,
    },
    FlightOffer {
        airline: Airline {
            name: "Korean Air",
            logo: "https://i.pinimg.com/originals/79/2b/c9/792bc9f5ca882dd26d13bc5b0ac3337a.jpg",
        },
        time: "6:45 AM - 2:59 PM",
        duration: "5 hr 14 min",
        emissions: Emissions { kg: 368, change_percent: 14 },
        price: 613,
        details: STANDARD_DETAILS,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_emission_labels() {
        assert_eq!(SAMPLE_OFFERS[0].emissions.label(), "+14% emissions");
        assert_eq!(SAMPLE_OFFERS[1].emissions.label(), "-21% emissions");
        assert!(SAMPLE_OFFERS[0].emissions.is_above_typical());
        assert!(!SAMPLE_OFFERS[1].emissions.is_above_typical());
    }

    #[test]
    fn test_sample_offers() {
        assert_eq!(SAMPLE_OFFERS.len(), 6);
        assert_eq!(SAMPLE_OFFERS[0].price_label(), "$605");
        assert!(SAMPLE_OFFERS.iter().all(|offer| offer.details.len() == 3));
        assert_eq!(SAMPLE_OFFERS[5].airline.name, "Korean Air");
    }
}
