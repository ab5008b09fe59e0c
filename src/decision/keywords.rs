/// Curated substrings associated with one disposal category. Matching is
/// case-insensitive containment; there is no priority ordering within a set.
#[derive(Debug, Clone, PartialEq)]
pub struct KeywordSet {
    keywords: Vec<String>,
}

impl KeywordSet {
    pub fn new<I, S>(keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            keywords: keywords
                .into_iter()
                .map(|k| k.as_ref().to_lowercase())
                .collect(),
        }
    }

    pub fn empty() -> Self {
        Self { keywords: vec![] }
    }

    pub fn matches(&self, label: &str) -> bool {
        let label = label.to_lowercase();
        self.keywords.iter().any(|k| label.contains(k))
    }

    pub fn is_empty(&self) -> bool {
        self.keywords.is_empty()
    }

    /// Labels the upstream classifier emits for common curbside recyclables.
    pub fn recyclable_defaults() -> Self {
        Self::new([
            // Glass
            "bottle",
            "water bottle",
            "wine bottle",
            "beer bottle",
            "glass bottle",
            "soda bottle",
            "jar",
            "glass jar",
            "glass container",
            "liquor bottle",
            "juice bottle",
            "mason jar",
            // Metal
            "can",
            "soda can",
            "pop can",
            "beer can",
            "tin",
            "tin can",
            "aluminium",
            "aluminum",
            "aluminum can",
            "steel",
            "metal can",
            "soup can",
            "food can",
            "aluminum foil",
            "metal lid",
            "bottle cap",
            "steel can",
            "metal container",
            // Paper & cardboard
            "paper",
            "newspaper",
            "magazine",
            "cardboard",
            "cardboard box",
            "carton",
            "paper bag",
            "mail",
            "envelope",
            "cereal box",
            "pizza box",
            "shipping box",
            "corrugated",
            "paperboard",
            "office paper",
            "notebook",
            "milk carton",
            "juice carton",
            "egg carton",
            "shoe box",
            "tissue box",
            // Plastic (common recyclable types)
            "plastic bottle",
            "water jug",
            "milk jug",
            "detergent bottle",
            "shampoo bottle",
            "conditioner bottle",
            "plastic container",
            "yogurt container",
            "butter tub",
            "storage container",
            "tupperware",
            "cleaning bottle",
        ])
    }

    /// Labels that usually mean landfill.
    pub fn trash_defaults() -> Self {
        Self::new([
            // Food & organic waste
            "banana",
            "peel",
            "apple",
            "orange",
            "pizza",
            "burger",
            "hotdog",
            "sandwich",
            "food",
            "leftover",
            "meat",
            "chicken",
            "fish",
            "egg",
            "eggshell",
            "bread",
            "fruit",
            "vegetable",
            "french fries",
            "taco",
            "salad",
            "pasta",
            "rice",
            "noodles",
            "cake",
            "cookie",
            "donut",
            "bagel",
            // Non-recyclable plastics & materials
            "plastic bag",
            "grocery bag",
            "shopping bag",
            "styrofoam",
            "polystyrene",
            "foam",
            "bubble wrap",
            "chip bag",
            "candy wrapper",
            "straw",
            "plastic wrap",
            "cellophane",
            "plastic cutlery",
            "plastic fork",
            "plastic knife",
            "plastic spoon",
            "foam container",
            "takeout container",
            "to-go container",
            // Contaminated paper products
            "tissue",
            "napkin",
            "paper towel",
            "paper plate",
            "paper cup",
            "coffee cup",
            "disposable",
            "used napkin",
            "paper napkin",
            "kleenex",
            "toilet paper",
            // Other trash
            "diaper",
            "cigarette",
            "cigarette butt",
            "wrapper",
            "trash",
            "garbage",
            "waste",
            "dirty",
            "soiled",
            "greasy",
            "contaminated",
            "gum",
            "chewing gum",
            "receipt",
        ])
    }
}
