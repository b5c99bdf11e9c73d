//! Reference library of Indian cattle breeds.
//!
//! Entries are keyed by the label the classifier returns (`Red_Sindhi`,
//! `bachaur`), which is also how a result screen links to a breed page.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BreedKind {
    Cattle,
    Buffalo,
}

impl fmt::Display for BreedKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BreedKind::Cattle => f.write_str("Cattle"),
            BreedKind::Buffalo => f.write_str("Buffalo"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BreedInfo {
    /// Classifier label.
    pub key: &'static str,
    pub name: &'static str,
    pub kind: BreedKind,
    pub origin: &'static str,
    pub milk_yield: &'static str,
    pub traits: &'static [&'static str],
    pub description: &'static str,
}

/// Shown for breeds the library has no page for.
pub static DEFAULT_BREED: BreedInfo = BreedInfo {
    key: "unknown",
    name: "Unknown Breed",
    kind: BreedKind::Cattle,
    origin: "Unknown",
    milk_yield: "N/A",
    traits: &["N/A"],
    description: "Information for this breed is currently unavailable.",
};

/// Outcome of [`find_breed`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BreedLookup<'a> {
    Known(&'static BreedInfo),
    /// No entry; pages render [`DEFAULT_BREED`] under the requested name.
    Unknown(&'a str),
}

impl BreedLookup<'_> {
    pub fn is_known(&self) -> bool {
        matches!(self, BreedLookup::Known(_))
    }

    pub fn name(&self) -> &str {
        match self {
            BreedLookup::Known(info) => info.name,
            BreedLookup::Unknown(name) if name.trim().is_empty() => DEFAULT_BREED.name,
            BreedLookup::Unknown(name) => name,
        }
    }

    /// Library entry to render, [`DEFAULT_BREED`] when unknown.
    pub fn info(&self) -> &'static BreedInfo {
        match self {
            BreedLookup::Known(info) => info,
            BreedLookup::Unknown(_) => &DEFAULT_BREED,
        }
    }
}

/// Looks a breed up by classifier label: exact match first, then
/// case-insensitive on the label, then case-insensitive on the display name.
pub fn find_breed(name: &str) -> BreedLookup<'_> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return BreedLookup::Unknown(name);
    }
    let lower = trimmed.to_lowercase();

    BREED_LIBRARY
        .iter()
        .find(|b| b.key == trimmed)
        .or_else(|| BREED_LIBRARY.iter().find(|b| b.key.to_lowercase() == lower))
        .or_else(|| BREED_LIBRARY.iter().find(|b| b.name.to_lowercase() == lower))
        .map(BreedLookup::Known)
        .unwrap_or(BreedLookup::Unknown(trimmed))
}

/// Case-insensitive substring search on name or origin, sorted by name.
///
/// An empty query returns the whole library.
pub fn search_library(query: &str) -> Vec<&'static BreedInfo> {
    let needle = query.trim().to_lowercase();
    let mut found: Vec<&'static BreedInfo> = BREED_LIBRARY
        .iter()
        .filter(|b| {
            needle.is_empty()
                || b.name.to_lowercase().contains(&needle)
                || b.origin.to_lowercase().contains(&needle)
        })
        .collect();
    found.sort_by_key(|b| b.name.to_lowercase());
    found
}

pub static BREED_LIBRARY: [BreedInfo; 50] = [
    BreedInfo {
        key: "Amritmahal",
        name: "Amritmahal",
        kind: BreedKind::Cattle,
        origin: "Karnataka",
        milk_yield: "Low (Draft Breed)",
        traits: &["Grey to dark grey", "Long tapering horns", "Compact muscular body"],
        description: "Amritmahal is a famous draft breed known for its endurance and speed. It was historically used for transporting army equipment.",
    },
    BreedInfo {
        key: "Ayrshire",
        name: "Ayrshire",
        kind: BreedKind::Cattle,
        origin: "Scotland",
        milk_yield: "4000 - 5000 kg",
        traits: &["Red and white markings", "Medium size", "Curved horns"],
        description: "Ayrshire cattle are a breed of dairy cattle from Ayrshire in southwest Scotland. They are known for their hardiness and high milk quality.",
    },
    BreedInfo {
        key: "Bargur",
        name: "Bargur",
        kind: BreedKind::Cattle,
        origin: "Tamil Nadu",
        milk_yield: "Low",
        traits: &["Red and white speckled", "Compact body", "Known for speed"],
        description: "Bargur cattle are found in the Bargur hills of Erode district. They are known for their endurance and speed in trotting operations.",
    },
    BreedInfo {
        key: "Dangi",
        name: "Dangi",
        kind: BreedKind::Cattle,
        origin: "Maharashtra (Nasik, Ahmednagar)",
        milk_yield: "Low (Draft)",
        traits: &["Red and white spots", "Thick skin", "Heavy rainfall tolerance"],
        description: "The Dangi breed is a draft breed known for its ability to work in heavy rainfall areas and rice fields. The skin excretes an oily secretion that protects it from rain.",
    },
    BreedInfo {
        key: "Deoni",
        name: "Deoni",
        kind: BreedKind::Cattle,
        origin: "Maharashtra (Latur, Parbhani)",
        milk_yield: "800 - 1000 kg",
        traits: &["Black and white spots", "Drooping ears", "Similiar to Gir"],
        description: "Deoni is a dual-purpose breed, used for both milk and draft. It is hardy and well-adapted to tropical conditions.",
    },
    BreedInfo {
        key: "Gir",
        name: "Gir",
        kind: BreedKind::Cattle,
        origin: "Gujarat (Saurashtra)",
        milk_yield: "1200 - 1800 kg",
        traits: &["Domed forehead", "Long pendulous ears", "Red to speckled red"],
        description: "Gir is one of the most famous dairy breeds of India. Native to the Gir forests, they are highly tolerant to stress and tropical diseases.",
    },
    BreedInfo {
        key: "Hallikar",
        name: "Hallikar",
        kind: BreedKind::Cattle,
        origin: "Karnataka",
        milk_yield: "Low (Draft)",
        traits: &["Grey color", "Long vertical horns", "Compact body"],
        description: "Hallikar is a draft breed from the Hallikar belt of Mysore. They are the progenitors of the Amritmahal breed and are known for their strength.",
    },
    BreedInfo {
        key: "Hariana",
        name: "Hariana",
        kind: BreedKind::Cattle,
        origin: "Haryana, Punjab",
        milk_yield: "1000 - 1500 kg",
        traits: &["White/Light Grey", "Compact body", "High forehead"],
        description: "Hariana is a prominent dual-purpose breed of North India. The bullocks are excellent workers and the cows are good milkers.",
    },
    BreedInfo {
        key: "Himachali Pahari",
        name: "Himachali Pahari",
        kind: BreedKind::Cattle,
        origin: "Himachal Pradesh",
        milk_yield: "300 - 500 kg",
        traits: &["Small size", "Various colors", "Adaptable to hills"],
        description: "Small sized cattle adapted to the hilly terrain of the Himalayas. They are hardy and can survive on poor quality fodder.",
    },
    BreedInfo {
        key: "Kangayam",
        name: "Kangayam",
        kind: BreedKind::Cattle,
        origin: "Tamil Nadu (Erode)",
        milk_yield: "Low",
        traits: &["Grey/White", "Stout erect horns", "Compact body"],
        description: "Kangayam cattle are a draft breed known for their strength. The bulls are grey with dark hump and forequarters, while cows are white.",
    },
    BreedInfo {
        key: "Kankrej",
        name: "Kankrej",
        kind: BreedKind::Cattle,
        origin: "Gujarat (Rann of Kutch)",
        milk_yield: "1000 - 1500 kg",
        traits: &["Silver-grey", "Large lyre-shaped horns", "Heavy hump"],
        description: "Kankrej is one of the heaviest and most powerful Indian breeds. They are dual-purpose and famous for their unique \"Sawai\" gait.",
    },
    BreedInfo {
        key: "Kenkatha",
        name: "Kenkatha",
        kind: BreedKind::Cattle,
        origin: "Uttar Pradesh / MP (Bundelkhand)",
        milk_yield: "Low",
        traits: &["Small sturdy", "Grey/Reddish", "Short horns"],
        description: "Kenkatha cattle are small but sturdy draft animals, well adapted to the rocky Vindhya hills region along the Ken river.",
    },
    BreedInfo {
        key: "Khariar",
        name: "Khariar",
        kind: BreedKind::Cattle,
        origin: "Odisha",
        milk_yield: "Low",
        traits: &["Small size", "Various colors", "Hardy"],
        description: "Khariar is a draft purpose breed found in the Nuapada district of Odisha.",
    },
    BreedInfo {
        key: "Khillari",
        name: "Khillari",
        kind: BreedKind::Cattle,
        origin: "Maharashtra (Satara, Sangli)",
        milk_yield: "Low",
        traits: &["Greyish white", "Long horns", "Fast gait"],
        description: "Khillari is a famous draft breed known for its speed and strength. It is often referred to as the \"Race Car\" of cattle breeds in Maharashtra.",
    },
    BreedInfo {
        key: "Konkan Kapila",
        name: "Konkan Kapila",
        kind: BreedKind::Cattle,
        origin: "Maharashtra / Goa (Konkan)",
        milk_yield: "Low",
        traits: &["Small size", "Reddish/Brown", "High disease resistance"],
        description: "Konkan Kapila is a small sized cattle breed from the coastal Konkan region. They are highly resistant to diseases and heat.",
    },
    BreedInfo {
        key: "Kosali",
        name: "Kosali",
        kind: BreedKind::Cattle,
        origin: "Chhattisgarh",
        milk_yield: "Low",
        traits: &["Small size", "Red/Grey", "Draft ability"],
        description: "Kosali is a draft breed from the plains of Chhattisgarh. They are very efficient for paddy cultivation.",
    },
    BreedInfo {
        key: "Krishna_Valley",
        name: "Krishna Valley",
        kind: BreedKind::Cattle,
        origin: "Karnataka",
        milk_yield: "900 kg",
        traits: &["Large size", "Grey/White", "Heavy hump"],
        description: "Krishna Valley is a heavy draft breed used for agriculture in the black cotton soil along the Krishna river.",
    },
    BreedInfo {
        key: "Ladakhi",
        name: "Ladakhi",
        kind: BreedKind::Cattle,
        origin: "Ladakh",
        milk_yield: "200 - 300 kg",
        traits: &["Small compact", "Black/Red", "Cold tolerance"],
        description: "Native to the high altitude Ladakh region, these small cattle produce milk with very high fat content (up to 5%).",
    },
    BreedInfo {
        key: "Lakhimi",
        name: "Lakhimi",
        kind: BreedKind::Cattle,
        origin: "Assam",
        milk_yield: "Low",
        traits: &["Small size", "Various colors", "Humped"],
        description: "Lakhimi is a dual purpose breed from Assam, used for milk and draft. They are well adapted to the humid climate.",
    },
    BreedInfo {
        key: "Malnad_gidda",
        name: "Malnad Gidda",
        kind: BreedKind::Cattle,
        origin: "Karnataka (Western Ghats)",
        milk_yield: "200 - 500 kg",
        traits: &["Dwarf size", "Black/Brown", "Agile"],
        description: "Malnad Gidda is a dwarf breed native to the rainforests of the Western Ghats. They are extremely agile and graze freely in forests.",
    },
    BreedInfo {
        key: "Mewati",
        name: "Mewati",
        kind: BreedKind::Cattle,
        origin: "Rajasthan / Haryana (Mewat)",
        milk_yield: "800 - 1000 kg",
        traits: &["White", "Medium size", "Docile"],
        description: "Mewati (or Kosi) is a dual purpose breed. They are docile and hard workers.",
    },
    BreedInfo {
        key: "Nari",
        name: "Nari",
        kind: BreedKind::Cattle,
        origin: "Rajasthan / Gujarat",
        milk_yield: "Low",
        traits: &["White/Grey", "Long horns", "Hardy"],
        description: "Nari cattle are migratory cattle kept by nomadic tribes in the Rajasthan-Gujarat border areas.",
    },
    BreedInfo {
        key: "Nimari",
        name: "Nimari",
        kind: BreedKind::Cattle,
        origin: "Madhya Pradesh (Nimar)",
        milk_yield: "Low",
        traits: &["Red with white splashes", "Aggressive", "Draft breed"],
        description: "Nimari cattle are red with large white splashes. They are known for their fiery temperament and use as draft animals.",
    },
    BreedInfo {
        key: "Ongole",
        name: "Ongole",
        kind: BreedKind::Cattle,
        origin: "Andhra Pradesh (Prakasam)",
        milk_yield: "1000 - 1500 kg",
        traits: &["Large muscular", "User white/grey", "Short horns"],
        description: "Ongole is a world-famous dual-purpose breed. It has contributed to the creation of the American Brahman breed. Bulls are extremely powerful.",
    },
    BreedInfo {
        key: "Poda Thirupu",
        name: "Poda Thirupu",
        kind: BreedKind::Cattle,
        origin: "Telangana",
        milk_yield: "Low",
        traits: &["Draft breed", "Hardy", "Yellow/Brown"],
        description: "A distinct draft breed from Telangana, known for its ability to work in difficult terrains.",
    },
    BreedInfo {
        key: "Pulikulam",
        name: "Pulikulam",
        kind: BreedKind::Cattle,
        origin: "Tamil Nadu (Madurai)",
        milk_yield: "Low",
        traits: &["Aggressive", "Used for Jallikattu", "Compact"],
        description: "Famous for its use in the Jallikattu bull-taming sport. Known as \"Jallikattu maadu\". They are agile and spirited.",
    },
    BreedInfo {
        key: "Punganur",
        name: "Punganur",
        kind: BreedKind::Cattle,
        origin: "Andhra Pradesh (Chittoor)",
        milk_yield: "500 kg",
        traits: &["Dwarf size", "White/Grey", "Crescent horns"],
        description: "The world's shortest humped cattle breed. Punganur is considered highly auspicious and is threatened by extinction.",
    },
    BreedInfo {
        key: "Purnea",
        name: "Purnea",
        kind: BreedKind::Cattle,
        origin: "Bihar",
        milk_yield: "Low",
        traits: &["Small", "Red/Grey", "Draft"],
        description: "Indigenous cattle of Purnea district in Bihar. Small but useful for light agricultural work.",
    },
    BreedInfo {
        key: "Rathi",
        name: "Rathi",
        kind: BreedKind::Cattle,
        origin: "Rajasthan (Bikaner)",
        milk_yield: "1500 - 2000 kg",
        traits: &["Brown and white", "Dual purpose", "Hardy"],
        description: "Rathi is an important milch breed of the dry regions of Rajasthan. It is considered a cousin of Sahiwal and Red Sindhi.",
    },
    BreedInfo {
        key: "Red kandhari",
        name: "Red Kandhari",
        kind: BreedKind::Cattle,
        origin: "Maharashtra (Nanded)",
        milk_yield: "Low",
        traits: &["Unified Red color", "Draft breed", "Moderate size"],
        description: "Known for their almost uniform deep red color. They are excellent draft animals.",
    },
    BreedInfo {
        key: "Red_Sindhi",
        name: "Red Sindhi",
        kind: BreedKind::Cattle,
        origin: "Sindh (Pakistan) / India",
        milk_yield: "1800 - 2500 kg",
        traits: &["Deep red", "Compact", "High milk fat"],
        description: "Red Sindhi is a renowned milch breed. Though originally from Sindh, organized herds are found in India. It has high heat tolerance.",
    },
    BreedInfo {
        key: "Sahiwal",
        name: "Sahiwal",
        kind: BreedKind::Cattle,
        origin: "Punjab (India/Pakistan)",
        milk_yield: "2000 - 3000 kg",
        traits: &["Reddish dun", "Loose skin (Lola)", "High milk"],
        description: "Considered the best milch breed of indigenous cattle. Known as \"Lola\" due to loose skin. High resistance to tick parasites.",
    },
    BreedInfo {
        key: "Shweta Kapila",
        name: "Shweta Kapila",
        kind: BreedKind::Cattle,
        origin: "Goa",
        milk_yield: "Low",
        traits: &["Completely white", "Draft", "Short horns"],
        description: "An indigenous breed from Goa, known for its complete white color and adaptability to coastal climates.",
    },
    BreedInfo {
        key: "Tharparkar",
        name: "Tharparkar",
        kind: BreedKind::Cattle,
        origin: "Rajasthan (Thar Desert)",
        milk_yield: "1800 - 2200 kg",
        traits: &["White/Grey", "Heat tolerant", "Medium size"],
        description: "Also known as \"White Sindhi\". Extremely heat tolerant and disease resistant. Can thrive on desert vegetation.",
    },
    BreedInfo {
        key: "Umblachery",
        name: "Umblachery",
        kind: BreedKind::Cattle,
        origin: "Tamil Nadu (Thanjavur)",
        milk_yield: "Low",
        traits: &["Red/Black", "White socks", "Dehorned usually"],
        description: "Umblachery cattle are distinct with white markings on feet (stockings) and tail switch. Calves are red, turning grey/black at maturity.",
    },
    BreedInfo {
        key: "Vechur",
        name: "Vechur",
        kind: BreedKind::Cattle,
        origin: "Kerala",
        milk_yield: "500 kg",
        traits: &["World's smallest", "High disease resistance", "Medicinal milk"],
        description: "Vechur was listed in the Guinness Book of Records as the smallest cattle breed. Its milk is believed to have medicinal properties.",
    },
    BreedInfo {
        key: "bachaur",
        name: "Bachaur",
        kind: BreedKind::Cattle,
        origin: "Bihar (Sitamarhi)",
        milk_yield: "Low",
        traits: &["Grey", "Resembles Hariana", "Draft"],
        description: "A draft breed from North Bihar, known for its working ability in the gangetic plains.",
    },
    BreedInfo {
        key: "badri",
        name: "Badri",
        kind: BreedKind::Cattle,
        origin: "Uttarakhand",
        milk_yield: "Low",
        traits: &["Small", "Black/Red", "Hill adapted"],
        description: "Small cattle found in the hilly regions of Uttarakhand. Adapted to steep terrain.",
    },
    BreedInfo {
        key: "bhelai",
        name: "Belahi",
        kind: BreedKind::Cattle,
        origin: "Haryana / Chandigarh",
        milk_yield: "Low",
        traits: &["Migratory", "Hardy", "Mixed colors"],
        description: "Indigenous cattle kept by Gujjar pastoralists in the foothills of Himalayas.",
    },
    BreedInfo {
        key: "dagri",
        name: "Dagri",
        kind: BreedKind::Cattle,
        origin: "Gujarat",
        milk_yield: "Low",
        traits: &["Draft", "White/Grey", "Medium"],
        description: "Draft breed mostly found in the Dahod and Panchmahal districts of Gujarat.",
    },
    BreedInfo {
        key: "gangatari",
        name: "Gangatiri",
        kind: BreedKind::Cattle,
        origin: "Uttar Pradesh / Bihar",
        milk_yield: "1000 kg",
        traits: &["White", "Medium horns", "Dual purpose"],
        description: "Native to the region along the banks of the Ganga river. Good milkers.",
    },
    BreedInfo {
        key: "gaolao",
        name: "Gaolao",
        kind: BreedKind::Cattle,
        origin: "Maharashtra (Wardha)",
        milk_yield: "600 kg",
        traits: &["White", "Long ears", "Draft"],
        description: "Closely related to the Ongole breed. Used mainly for transport and agriculture in the Wardha region.",
    },
    BreedInfo {
        key: "ghumsari",
        name: "Ghumsari",
        kind: BreedKind::Cattle,
        origin: "Odisha",
        milk_yield: "Low",
        traits: &["Small", "Draft", "Hardy"],
        description: "Draft breed from Ganjam district of Odisha.",
    },
    BreedInfo {
        key: "kherigarh",
        name: "Kherigarh",
        kind: BreedKind::Cattle,
        origin: "Uttar Pradesh (Lakhimpur)",
        milk_yield: "Low",
        traits: &["White", "Upstanding horns", "Draft"],
        description: "Draft breed found in the Kheri district. The bullocks are active and good workers.",
    },
    BreedInfo {
        key: "malvi",
        name: "Malvi",
        kind: BreedKind::Cattle,
        origin: "Madhya Pradesh (Malwa)",
        milk_yield: "Low",
        traits: &["White/Grey", "Short horns", "Compact"],
        description: "Draft breed from the Malwa plateau. Known for strong bullocks.",
    },
    BreedInfo {
        key: "motu",
        name: "Motu",
        kind: BreedKind::Cattle,
        origin: "Odisha / Chhattisgarh",
        milk_yield: "Low",
        traits: &["Dwarf", "Brown/Red", "Polled (often)"],
        description: "Dwarf breed found in the Motu area of Malkangiri district. They are extremely hardy.",
    },
    BreedInfo {
        key: "nagori",
        name: "Nagori",
        kind: BreedKind::Cattle,
        origin: "Rajasthan (Nagaur)",
        milk_yield: "Low",
        traits: &["White", "Long horns", "Fast draft"],
        description: "Famous for being active and fast trotters. Used for light draft work.",
    },
    BreedInfo {
        key: "ponwar",
        name: "Ponwar",
        kind: BreedKind::Cattle,
        origin: "Uttar Pradesh (Pilibhit)",
        milk_yield: "Low",
        traits: &["Black and White", "Small", "Active"],
        description: "Small, active cattle with black and white patches. Found in the Pilibhit district.",
    },
    BreedInfo {
        key: "siri",
        name: "Siri",
        kind: BreedKind::Cattle,
        origin: "Sikkim / Bhutan",
        milk_yield: "Low",
        traits: &["Black/White", "Long hair", "Hill draft"],
        description: "Draft breed of the high altitude regions of Sikkim and Bhutan. Similar to the Yak in some traits.",
    },
    BreedInfo {
        key: "thutho",
        name: "Thutho",
        kind: BreedKind::Cattle,
        origin: "Nagaland",
        milk_yield: "Low",
        traits: &["Small", "Black", "Meat/Draft"],
        description: "Indigenous cattle of Nagaland. Used for draft and meat.",
    },
];
