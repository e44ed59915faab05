//! English (`en`) word lists.

pub static FIRST_NAMES: &[&str] = &[
    "James", "Mary", "Robert", "Patricia", "John", "Jennifer", "Michael", "Linda",
    "David", "Elizabeth", "William", "Barbara", "Richard", "Susan", "Joseph", "Jessica",
    "Thomas", "Sarah", "Charles", "Karen", "Christopher", "Lisa", "Daniel", "Nancy",
    "Matthew", "Betty", "Anthony", "Margaret", "Mark", "Sandra", "Donald", "Ashley",
    "Steven", "Dorothy", "Paul", "Kimberly", "Andrew", "Emily", "Joshua", "Donna",
    "Kenneth", "Michelle", "Kevin", "Carol", "Brian", "Amanda", "George", "Melissa",
    "Timothy", "Deborah", "Ronald", "Stephanie", "Edward", "Rebecca", "Jason", "Sharon",
    "Jeffrey", "Laura", "Ryan", "Cynthia", "Jacob", "Kathleen", "Gary", "Amy",
    "Nicholas", "Angela", "Eric", "Shirley", "Jonathan", "Anna", "Stephen", "Brenda",
    "Larry", "Pamela", "Justin", "Emma", "Scott", "Nicole", "Brandon", "Helen",
    "Benjamin", "Samantha", "Samuel", "Katherine", "Raymond", "Christine", "Gregory", "Debra",
    "Frank", "Rachel", "Alexander", "Carolyn", "Patrick", "Janet", "Jack", "Catherine",
    "Dennis", "Maria", "Jerry", "Heather", "Tyler", "Diane", "Aaron", "Ruth",
    "Jose", "Julie", "Adam", "Olivia", "Nathan", "Joyce", "Henry", "Virginia",
    "Peter", "Victoria", "Zachary", "Kelly", "Douglas", "Lauren", "Harold", "Christina",
    "Carl", "Joan", "Arthur", "Evelyn", "Gerald", "Judith", "Roger", "Megan",
    "Keith", "Andrea", "Jeremy", "Cheryl", "Terry", "Hannah", "Lawrence", "Jacqueline",
    "Sean", "Martha", "Christian", "Gloria", "Albert", "Teresa", "Ethan", "Sara",
    "Austin", "Madison", "Jesse", "Frances", "Bryan", "Kathryn", "Bruce", "Abigail",
    "Jordan", "Alice", "Noah", "Grace", "Dylan", "Sophia", "Liam", "Isabella",
];

pub static LAST_NAMES: &[&str] = &[
    "Smith", "Johnson", "Williams", "Brown", "Jones", "Garcia", "Miller", "Davis",
    "Rodriguez", "Martinez", "Hernandez", "Lopez", "Gonzalez", "Wilson", "Anderson",
    "Thomas", "Taylor", "Moore", "Jackson", "Martin", "Lee", "Perez", "Thompson",
    "White", "Harris", "Sanchez", "Clark", "Ramirez", "Lewis", "Robinson", "Walker",
    "Young", "Allen", "King", "Wright", "Scott", "Torres", "Nguyen", "Hill",
    "Flores", "Green", "Adams", "Nelson", "Baker", "Hall", "Rivera", "Campbell",
    "Mitchell", "Carter", "Roberts", "Gomez", "Phillips", "Evans", "Turner", "Diaz",
    "Parker", "Cruz", "Edwards", "Collins", "Reyes", "Stewart", "Morris", "Morales",
    "Murphy", "Cook", "Rogers", "Gutierrez", "Ortiz", "Morgan", "Cooper", "Peterson",
    "Bailey", "Reed", "Kelly", "Howard", "Ramos", "Kim", "Cox", "Ward",
    "Richardson", "Watson", "Brooks", "Chavez", "Wood", "James", "Bennett", "Gray",
    "Mendoza", "Ruiz", "Hughes", "Price", "Alvarez", "Castillo", "Sanders", "Patel",
    "Myers", "Long", "Ross", "Foster", "Jimenez", "Powell", "Jenkins", "Perry",
    "Russell", "Sullivan", "Bell", "Coleman", "Butler", "Henderson", "Barnes", "Fisher",
    "Vasquez", "Simmons", "Griffin", "Aguilar", "Stevens", "Murray", "Ford", "Castro",
    "Marshall", "Owens", "Harrison", "Fernandez", "McDonald", "Woods", "Washington",
    "Kennedy", "Wells", "Vargas", "Henry", "Chen", "Freeman", "Webb", "Tucker",
    "Hoffman", "Black", "Burns", "Gibson", "Ellis", "Dunn", "Reynolds", "Hamilton",
];

pub static FREE_EMAIL_DOMAINS: &[&str] = &["gmail.com", "yahoo.com", "hotmail.com"];

pub static PHONE_FORMATS: &[&str] = &[
    "###-###-####",
    "(###) ###-####",
    "1-###-###-####",
    "###.###.####",
    "###-###-#### x###",
    "(###) ###-#### x####",
    "1-###-###-#### x#####",
    "###.###.#### x####",
];

pub static STREET_SUFFIXES: &[&str] = &[
    "Alley", "Avenue", "Boulevard", "Bridge", "Brook", "Circle", "Court", "Creek",
    "Crossing", "Drive", "Estates", "Expressway", "Field", "Fork", "Garden", "Glen",
    "Grove", "Harbor", "Heights", "Highway", "Hill", "Hollow", "Lake", "Lane",
    "Manor", "Meadow", "Mill", "Mountain", "Park", "Parkway", "Pass", "Place",
    "Plaza", "Point", "Ridge", "Road", "Route", "Square", "Station", "Street",
    "Summit", "Terrace", "Trail", "Valley", "View", "Villages", "Way", "Wells",
];

pub static CITY_PREFIXES: &[&str] = &["North", "East", "West", "South", "New", "Lake", "Port"];

pub static CITY_SUFFIXES: &[&str] = &[
    "town", "ton", "land", "ville", "berg", "burgh", "borough", "bury", "view", "port",
    "mouth", "stad", "furt", "chester", "fort", "haven", "side", "shire",
];

pub static STATES: &[&str] = &[
    "Alabama", "Alaska", "Arizona", "Arkansas", "California", "Colorado", "Connecticut",
    "Delaware", "Florida", "Georgia", "Hawaii", "Idaho", "Illinois", "Indiana", "Iowa",
    "Kansas", "Kentucky", "Louisiana", "Maine", "Maryland", "Massachusetts", "Michigan",
    "Minnesota", "Mississippi", "Missouri", "Montana", "Nebraska", "Nevada",
    "New Hampshire", "New Jersey", "New Mexico", "New York", "North Carolina",
    "North Dakota", "Ohio", "Oklahoma", "Oregon", "Pennsylvania", "Rhode Island",
    "South Carolina", "South Dakota", "Tennessee", "Texas", "Utah", "Vermont",
    "Virginia", "Washington", "West Virginia", "Wisconsin", "Wyoming",
];

pub static COUNTRIES: &[&str] = &[
    "Argentina", "Australia", "Austria", "Belgium", "Brazil", "Bulgaria", "Canada",
    "Chile", "China", "Colombia", "Croatia", "Czech Republic", "Denmark", "Egypt",
    "Estonia", "Finland", "France", "Germany", "Greece", "Hungary", "Iceland", "India",
    "Indonesia", "Ireland", "Israel", "Italy", "Japan", "Kenya", "Latvia", "Lithuania",
    "Luxembourg", "Malaysia", "Mexico", "Morocco", "Netherlands", "New Zealand",
    "Nigeria", "Norway", "Peru", "Philippines", "Poland", "Portugal", "Romania",
    "Singapore", "Slovakia", "Slovenia", "South Africa", "South Korea", "Spain",
    "Sweden", "Switzerland", "Thailand", "Turkey", "Ukraine", "United Kingdom",
    "United States of America", "Uruguay", "Vietnam",
];

pub static POSTCODE_FORMATS: &[&str] = &["#####", "#####-####"];

pub static DEPARTMENTS: &[&str] = &[
    "Books", "Movies", "Music", "Games", "Electronics", "Computers", "Home", "Garden",
    "Tools", "Grocery", "Health", "Beauty", "Toys", "Kids", "Baby", "Clothing", "Shoes",
    "Jewelery", "Sports", "Outdoors", "Automotive", "Industrial",
];

pub static PRODUCT_ADJECTIVES: &[&str] = &[
    "Small", "Ergonomic", "Rustic", "Intelligent", "Gorgeous", "Incredible", "Fantastic",
    "Practical", "Sleek", "Awesome", "Generic", "Handcrafted", "Handmade", "Licensed",
    "Refined", "Unbranded", "Tasty", "Recycled", "Rustic", "Soft", "Licensed",
];

pub static PRODUCT_MATERIALS: &[&str] = &[
    "Steel", "Wooden", "Concrete", "Plastic", "Cotton", "Granite", "Rubber", "Metal",
    "Soft", "Fresh", "Frozen",
];

pub static PRODUCT_NAMES: &[&str] = &[
    "Chair", "Car", "Computer", "Keyboard", "Mouse", "Bike", "Ball", "Gloves", "Pants",
    "Shirt", "Table", "Shoes", "Hat", "Towels", "Soap", "Tuna", "Chicken", "Fish",
    "Cheese", "Bacon", "Pizza", "Salad", "Sausages", "Chips",
];

pub static PRODUCT_DESCRIPTIONS: &[&str] = &[
    "Ergonomic executive chair upholstered in bonded black leather and PVC padded seat and back for all-day comfort and support",
    "The automobile layout consists of a front-engine design, with transaxle-type transmissions mounted at the rear of the engine and four wheel drive",
    "New ABC 13 9370, 13.3, 5th Gen CoreA5-8250U, 8GB RAM, 256GB SSD, power UHD Graphics, OS 10 Home, OS Office A & J 2016",
    "The slim & simple Maple Gaming Keyboard from Dev Byte comes with a sleek body and 7- Color RGB LED Back-lighting for smart functionality",
    "The Apollotech B340 is an affordable wireless mouse with reliable connectivity, 12 months battery life and modern design",
    "The Nagasaki Lander is the trademarked name of several series of Nagasaki sport bikes, that started with the 1984 ABC800J",
    "The Football Is Good For Training And Recreational Purposes",
    "Carbonite web goalkeeper gloves are ergonomically designed to give easy fit",
    "Boston's most advanced compression wear technology increases muscle oxygenation, stabilizes active muscles",
    "New range of formal shirts are designed keeping you in mind. With fits and styling that will make you stand apart",
    "The beautiful range of Apple Naturale that has an exciting mix of natural ingredients. With the Goodness of 100% Natural Ingredients",
    "Andy shoes are designed to keeping in mind durability as well as trends, the most stylish range of shoes & sandals",
];

pub static COLORS: &[&str] = &[
    "red", "green", "blue", "yellow", "purple", "mint green", "teal", "white", "black",
    "orange", "pink", "grey", "maroon", "violet", "turquoise", "tan", "sky blue",
    "salmon", "plum", "orchid", "olive", "magenta", "lime", "ivory", "indigo", "gold",
    "fuchsia", "cyan", "azure", "lavender", "silver",
];

pub static COMPANY_SUFFIXES: &[&str] = &["Inc", "and Sons", "LLC", "Group"];

pub static CATCH_PHRASE_ADJECTIVES: &[&str] = &[
    "Adaptive", "Advanced", "Ameliorated", "Assimilated", "Automated", "Balanced",
    "Business-focused", "Centralized", "Cloned", "Compatible", "Configurable",
    "Cross-group", "Cross-platform", "Customer-focused", "Customizable", "Decentralized",
    "De-engineered", "Devolved", "Digitized", "Distributed", "Diverse", "Down-sized",
    "Enhanced", "Enterprise-wide", "Ergonomic", "Exclusive", "Expanded", "Extended",
    "Face to face", "Focused", "Front-line", "Fully-configurable", "Function-based",
    "Fundamental", "Future-proofed", "Grass-roots", "Horizontal", "Implemented",
    "Innovative", "Integrated", "Intuitive", "Inverse", "Managed", "Mandatory",
    "Monitored", "Multi-channelled", "Multi-lateral", "Multi-layered", "Networked",
    "Object-based", "Open-architected", "Open-source", "Operative", "Optimized",
    "Optional", "Organic", "Organized", "Persevering", "Persistent", "Phased",
    "Polarised", "Pre-emptive", "Proactive", "Profit-focused", "Profound",
    "Programmable", "Progressive", "Public-key", "Quality-focused", "Reactive",
    "Realigned", "Re-contextualized", "Re-engineered", "Reduced", "Reverse-engineered",
    "Right-sized", "Robust", "Seamless", "Secured", "Self-enabling", "Sharable",
    "Stand-alone", "Streamlined", "Switchable", "Synchronised", "Synergistic",
    "Synergized", "Team-oriented", "Total", "Triple-buffered", "Universal", "Up-sized",
    "Upgradable", "User-centric", "User-friendly", "Versatile", "Virtual", "Visionary",
    "Vision-oriented",
];

pub static CATCH_PHRASE_DESCRIPTORS: &[&str] = &[
    "24 hour", "24/7", "3rd generation", "4th generation", "5th generation",
    "6th generation", "actuating", "analyzing", "asymmetric", "asynchronous",
    "attitude-oriented", "background", "bandwidth-monitored", "bi-directional",
    "bifurcated", "bottom-line", "clear-thinking", "client-driven", "client-server",
    "coherent", "cohesive", "composite", "context-sensitive", "contextually-based",
    "content-based", "dedicated", "demand-driven", "didactic", "directional",
    "discrete", "disintermediate", "dynamic", "eco-centric", "empowering",
    "encompassing", "even-keeled", "executive", "explicit", "exuding", "fault-tolerant",
    "foreground", "fresh-thinking", "full-range", "global", "grid-enabled", "heuristic",
    "high-level", "holistic", "homogeneous", "human-resource", "hybrid", "impactful",
    "incremental", "intangible", "interactive", "intermediate", "leading edge",
    "local", "logistical", "maximized", "methodical", "mission-critical", "mobile",
    "modular", "motivating", "multimedia", "multi-state", "multi-tasking", "national",
    "needs-based", "neutral", "next generation", "non-volatile", "object-oriented",
    "optimal", "optimizing", "radical", "real-time", "reciprocal", "regional",
    "responsive", "scalable", "secondary", "solution-oriented", "stable", "static",
    "systematic", "systemic", "system-worthy", "tangible", "tertiary", "transitional",
    "uniform", "upward-trending", "user-facing", "value-added", "web-enabled",
    "well-modulated", "zero administration", "zero defect", "zero tolerance",
];

pub static CATCH_PHRASE_NOUNS: &[&str] = &[
    "ability", "access", "adapter", "algorithm", "alliance", "analyzer", "application",
    "approach", "architecture", "archive", "artificial intelligence", "array",
    "attitude", "benchmark", "budgetary management", "capability", "capacity",
    "challenge", "circuit", "collaboration", "complexity", "concept", "conglomeration",
    "contingency", "core", "customer loyalty", "database", "data-warehouse",
    "definition", "emulation", "encoding", "encryption", "extranet", "firmware",
    "flexibility", "focus group", "forecast", "frame", "framework", "function",
    "functionalities", "Graphic Interface", "groupware", "Graphical User Interface",
    "hardware", "help-desk", "hierarchy", "hub", "implementation", "info-mediaries",
    "infrastructure", "initiative", "installation", "instruction set", "interface",
    "internet solution", "intranet", "knowledge user", "knowledge base", "local area network",
    "leverage", "matrices", "matrix", "methodology", "middleware", "migration", "model",
    "moderator", "monitoring", "moratorium", "neural-net", "open architecture",
    "open system", "orchestration", "paradigm", "parallelism", "policy", "portal",
    "pricing structure", "process improvement", "product", "productivity", "project",
    "projection", "protocol", "secured line", "service-desk", "software", "solution",
    "standardization", "strategy", "structure", "success", "superstructure", "support",
    "synergy", "system engine", "task-force", "throughput", "time-frame", "toolset",
    "utilisation", "website", "workforce",
];

pub static BS_VERBS: &[&str] = &[
    "implement", "utilize", "integrate", "streamline", "optimize", "evolve", "transform",
    "embrace", "enable", "orchestrate", "leverage", "reinvent", "aggregate", "architect",
    "enhance", "incentivize", "morph", "empower", "envisioneer", "monetize", "harness",
    "facilitate", "seize", "disintermediate", "synergize", "strategize", "deploy",
    "brand", "grow", "target", "syndicate", "synthesize", "deliver", "mesh", "incubate",
    "engage", "maximize", "benchmark", "expedite", "reintermediate", "whiteboard",
    "visualize", "repurpose", "innovate", "scale", "unleash", "drive", "extend",
    "engineer", "revolutionize", "generate", "exploit", "transition", "e-enable",
    "iterate", "cultivate", "matrix", "productize", "redefine", "recontextualize",
];

pub static BS_ADJECTIVES: &[&str] = &[
    "clicks-and-mortar", "value-added", "vertical", "proactive", "robust",
    "revolutionary", "scalable", "leading-edge", "innovative", "intuitive", "strategic",
    "e-business", "mission-critical", "sticky", "one-to-one", "24/7", "end-to-end",
    "global", "B2B", "B2C", "granular", "frictionless", "virtual", "viral", "dynamic",
    "24/365", "best-of-breed", "killer", "magnetic", "bleeding-edge", "web-enabled",
    "interactive", "dot-com", "sexy", "back-end", "real-time", "efficient", "front-end",
    "distributed", "seamless", "extensible", "turn-key", "world-class", "open-source",
    "cross-platform", "cross-media", "synergistic", "bricks-and-clicks", "out-of-the-box",
    "enterprise", "integrated", "impactful", "wireless", "transparent", "next-generation",
    "cutting-edge", "user-centric", "visionary", "customized", "ubiquitous", "plug-and-play",
    "collaborative", "compelling", "holistic", "rich",
];

pub static BS_NOUNS: &[&str] = &[
    "synergies", "web-readiness", "paradigms", "markets", "partnerships",
    "infrastructures", "platforms", "initiatives", "channels", "eyeballs", "communities",
    "ROI", "solutions", "e-tailers", "e-services", "action-items", "portals", "niches",
    "technologies", "content", "vortals", "supply-chains", "convergence", "relationships",
    "architectures", "interfaces", "e-markets", "e-commerce", "systems", "bandwidth",
    "infomediaries", "models", "mindshare", "deliverables", "users", "schemas", "networks",
    "applications", "metrics", "e-business", "functionalities", "experiences",
    "web services", "methodologies",
];
