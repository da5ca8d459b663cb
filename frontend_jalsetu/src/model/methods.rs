// frontend_jalsetu/src/model/methods.rs
//! Traditional rainwater structures by Indian state or region.

const REGIONAL_METHODS: &[(&str, &[&str])] = &[
    ("Kerala", &["Surangam", "Karambu"]),
    ("Tamil Nadu", &["Eri", "Ooranis"]),
    ("Karnataka", &["Madakas", "Neeruganti"]),
    ("Andhra Pradesh", &["Cheruvu"]),
    ("Maharashtra", &["Phad Irrigation", "Ramtek"]),
    ("Madhya Pradesh", &["Katas", "Mundas", "Bandhas"]),
    ("Odisha", &["Katas", "Mundas", "Bandhas"]),
    ("Gujarat", &["Virdas"]),
    ("Rajasthan", &["Naada/Bandha", "Johads", "Talabs", "Taankas", "Stepwells/Baoli"]),
    ("Uttarakhand", &["Naula", "Gul", "Dhara", "Simar", "Khel"]),
    ("Himachal Pradesh", &["Kul", "Khatri"]),
    ("Jammu And Kashmir", &["Zing"]),
    ("Ladakh", &["Zing"]),
    ("Uttar Pradesh", &["Kunds"]),
    ("Bihar", &["Ahar", "Pynes"]),
    ("Bengal", &["Inundation Channels"]),
    ("Meghalaya", &["Bamboo Drip Irrigation"]),
    ("Arunachal Pradesh", &["Apatani"]),
    ("Assam", &["Dongs", "Garh", "Dam"]),
    ("Nagaland", &["Zabo"]),
    ("Nicobar", &["Jackwells"]),
];

const GENERAL_METHODS: &[&str] = &[
    "Rooftop Rainwater Harvesting",
    "Check Dams / Percolation Tanks",
    "Community Ponds / Step Wells",
];

#[derive(Clone, Debug, PartialEq)]
pub struct RegionalMethods {
    /// `None` when no known region was found in the location
    pub region: Option<&'static str>,
    pub methods: &'static [&'static str],
}

fn title_case(s: &str) -> String {
    s.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

/// Look through the comma separated parts of a location ("Jaipur, Rajasthan")
/// for a known region, last part first.
pub fn methods_for_location(location: &str) -> RegionalMethods {
    location
        .rsplit(',')
        .map(title_case)
        .find_map(|part| {
            REGIONAL_METHODS
                .iter()
                .find(|(region, _)| *region == part || part.strip_prefix("West ") == Some(*region))
        })
        .map(|(region, methods)| RegionalMethods {
            region: Some(*region),
            methods: *methods,
        })
        .unwrap_or(RegionalMethods {
            region: None,
            methods: GENERAL_METHODS,
        })
}
