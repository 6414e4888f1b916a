//! Embedded word pools backing [`crate::WordPools::default`].

pub(crate) const FIRST_NAMES: &[&str] = &[
    "Ada", "Alan", "Amara", "Andrea", "Anil", "Beatriz", "Boris", "Chen", "Chiara", "Dmitri",
    "Elena", "Emeka", "Farah", "Grace", "Hana", "Ines", "Ivan", "Jamal", "Jonas", "Keiko",
    "Lars", "Leila", "Lucia", "Mateo", "Mei", "Nadia", "Noah", "Olga", "Omar", "Priya", "Rafael",
    "Rosa", "Sanjay", "Sofia", "Tariq", "Thea", "Tomasz", "Uma", "Victor", "Wen", "Yara", "Zoe",
];

pub(crate) const LAST_NAMES: &[&str] = &[
    "Abe", "Alvarez", "Andersen", "Baker", "Banda", "Becker", "Costa", "Dubois", "Eriksson",
    "Fernandez", "Fischer", "Garcia", "Haddad", "Hughes", "Ito", "Jensen", "Kaur", "Kowalski",
    "Larsen", "Lopez", "Moreau", "Murphy", "Nakamura", "Novak", "Okafor", "Olsen", "Patel",
    "Petrov", "Quinn", "Rossi", "Santos", "Schmidt", "Silva", "Tanaka", "Underwood", "Varga",
    "Wagner", "Walsh", "Xu", "Yilmaz", "Zhang", "Zielinski",
];

pub(crate) const CITIES: &[&str] = &[
    "Accra", "Amsterdam", "Auckland", "Bangalore", "Barcelona", "Bergen", "Bogota", "Brisbane",
    "Cairo", "Chicago", "Dublin", "Edinburgh", "Florence", "Geneva", "Hamburg", "Helsinki",
    "Kyoto", "Lagos", "Lima", "Lisbon", "Lyon", "Manchester", "Montreal", "Nairobi", "Oslo",
    "Porto", "Prague", "Quito", "Seoul", "Tallinn", "Toronto", "Valencia", "Vienna", "Warsaw",
];

pub(crate) const COUNTRIES: &[&str] = &[
    "Argentina", "Australia", "Austria", "Brazil", "Canada", "Chile", "Colombia", "Czechia",
    "Denmark", "Egypt", "Estonia", "Finland", "France", "Germany", "Ghana", "India", "Ireland",
    "Italy", "Japan", "Kenya", "Mexico", "Netherlands", "New Zealand", "Nigeria", "Norway",
    "Peru", "Poland", "Portugal", "South Korea", "Spain", "Sweden", "Switzerland",
    "United Kingdom", "United States",
];

pub(crate) const STREETS: &[&str] = &[
    "Acacia Avenue", "Bridge Street", "Castle Road", "Chapel Lane", "Church Street",
    "Elm Grove", "Harbour View", "High Street", "Kings Road", "Maple Drive", "Mill Lane",
    "North Parade", "Orchard Way", "Park Avenue", "Queens Walk", "Riverside", "Station Road",
    "Victoria Terrace",
];

pub(crate) const COMPANY_STEMS: &[&str] = &[
    "Apex", "Beacon", "Bluefin", "Cobalt", "Copperleaf", "Driftwood", "Evergreen", "Fjord",
    "Granite", "Harbor", "Ironbark", "Juniper", "Keystone", "Lumen", "Meridian", "Northwind",
    "Orchid", "Pinnacle", "Quarry", "Redwood", "Summit", "Tidewater", "Vertex", "Willow",
];

pub(crate) const COMPANY_SUFFIXES: &[&str] = &[
    "Analytics", "Group", "Holdings", "Industries", "Labs", "Logistics", "Partners", "Systems",
    "Technologies", "Ventures",
];

pub(crate) const JOBS: &[&str] = &[
    "Accountant", "Architect", "Barista", "Biologist", "Carpenter", "Chemist", "Data Analyst",
    "Dentist", "Editor", "Electrician", "Engineer", "Firefighter", "Geologist", "Graphic Designer",
    "Journalist", "Lawyer", "Librarian", "Mechanic", "Nurse", "Pharmacist", "Photographer",
    "Pilot", "Product Manager", "Sales Representative", "Software Developer", "Statistician",
    "Surveyor", "Teacher", "Translator", "Veterinarian",
];

pub(crate) const COLORS: &[&str] = &[
    "amber", "azure", "beige", "black", "blue", "bronze", "coral", "crimson", "cyan", "gold",
    "gray", "green", "indigo", "ivory", "lavender", "lime", "magenta", "maroon", "navy", "olive",
    "orange", "pink", "plum", "purple", "red", "salmon", "silver", "teal", "violet", "white",
    "yellow",
];

pub(crate) const DOMAINS: &[&str] = &[
    "example.com", "example.net", "example.org", "mail.test", "post.test", "inbox.invalid",
];

pub(crate) const WORDS: &[&str] = &[
    "about", "across", "after", "again", "almost", "answer", "around", "became", "before",
    "began", "below", "better", "between", "bright", "carry", "change", "clear", "close",
    "common", "course", "during", "early", "enough", "every", "example", "field", "figure",
    "follow", "garden", "great", "ground", "group", "happen", "heard", "inside", "island",
    "known", "large", "later", "learn", "light", "little", "market", "measure", "minute",
    "moment", "morning", "mountain", "music", "never", "number", "often", "order", "paper",
    "people", "picture", "place", "plain", "point", "public", "question", "quickly", "record",
    "remember", "river", "round", "second", "several", "simple", "since", "small", "sound",
    "special", "square", "still", "story", "strong", "study", "surface", "system", "table",
    "through", "together", "travel", "under", "until", "usual", "valley", "water", "weather",
    "where", "while", "whole", "window", "winter", "wonder", "world", "young",
];

pub(crate) const TLDS: &[&str] = &["com", "net", "org", "io", "dev", "info"];
