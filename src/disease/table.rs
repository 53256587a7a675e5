//! Label -> reference entry data.

use super::{DiseaseInfo, Severity};

const HEALTHY_DESCRIPTION: &str = "Healthy plant with no signs of disease or pests.";
const HEALTHY_CARE: &[&str] = &[
    "Regular care",
    "Adequate watering",
    "Balanced fertilization",
];
const AIRFLOW_SPRAY: &[&str] = &[
    "Keep proper plant spacing",
    "Improve air circulation",
    "Apply fungicide regularly",
];
const LEAF_REMOVAL_SPACING: &[&str] = &[
    "Remove infected leaves",
    "Apply fungicide",
    "Keep proper plant spacing",
];
const LEAF_FRUIT_REMOVAL_PRUNING: &[&str] = &[
    "Remove infected leaves and fruit",
    "Apply fungicide",
    "Prune properly",
];
const LEAF_FRUIT_REMOVAL_SPACING: &[&str] = &[
    "Remove infected leaves and fruit",
    "Apply fungicide",
    "Keep proper plant spacing",
];
const PART_REMOVAL_DISINFECT: &[&str] = &[
    "Remove infected parts",
    "Apply fungicide",
    "Disinfect the whole tree",
];
const PLANT_REMOVAL_SOIL: &[&str] = &[
    "Remove infected plants",
    "Apply fungicide",
    "Disinfect the soil",
];
const VIRUS_TREATMENT: &[&str] = &[
    "Remove infected plants",
    "Apply antiviral treatment",
    "Disinfect the soil",
];
const VIRUS_PREVENTION: &[&str] = &[
    "Use healthy seedlings",
    "Apply insecticide regularly",
    "Maintain proper care",
];

const fn healthy(name: &'static str) -> DiseaseInfo {
    DiseaseInfo {
        name,
        description: HEALTHY_DESCRIPTION,
        symptoms: &[],
        treatment: &[],
        prevention: HEALTHY_CARE,
        severity: Severity::Low,
    }
}

pub(super) static ENTRIES: &[(&str, DiseaseInfo)] = &[
    (
        "Apple___Apple_scab",
        DiseaseInfo {
            name: "Apple scab",
            description: "Fungal disease of apple leaves and fruit, marked by dark spots.",
            symptoms: &[
                "Dark spots on leaves",
                "Scab-like lesions on fruit",
                "Leaf drop in severe cases",
            ],
            treatment: LEAF_FRUIT_REMOVAL_PRUNING,
            prevention: AIRFLOW_SPRAY,
            severity: Severity::Medium,
        },
    ),
    (
        "Apple___Black_rot",
        DiseaseInfo {
            name: "Apple black rot",
            description: "Serious fungal disease affecting apple fruit and branches.",
            symptoms: &[
                "Black rot on fruit",
                "Cankers on branches",
                "Brown spots on leaves",
            ],
            treatment: PART_REMOVAL_DISINFECT,
            prevention: &[
                "Prune properly",
                "Thin the fruit",
                "Apply fungicide regularly",
            ],
            severity: Severity::High,
        },
    ),
    (
        "Apple___Cedar_apple_rust",
        DiseaseInfo {
            name: "Cedar apple rust",
            description: "Rust disease cycling between apple and cedar trees, marked by orange spots.",
            symptoms: &[
                "Orange spots on leaves",
                "Scab-like lesions on fruit",
                "Brown galls on cedars",
            ],
            treatment: &[
                "Remove infected leaves and fruit",
                "Apply fungicide",
                "Keep distance from cedar trees",
            ],
            prevention: &[
                "Keep distance from cedar trees",
                "Apply fungicide regularly",
                "Prune properly",
            ],
            severity: Severity::Medium,
        },
    ),
    ("Apple___healthy", healthy("Healthy apple")),
    ("Blueberry___healthy", healthy("Healthy blueberry")),
    (
        "Cherry___Powdery_mildew",
        DiseaseInfo {
            name: "Cherry powdery mildew",
            description: "Fungal disease of cherry leaves and fruit, marked by a white powdery coating.",
            symptoms: &[
                "White powder on leaves",
                "White spots on fruit",
                "Twisted leaves",
            ],
            treatment: LEAF_FRUIT_REMOVAL_PRUNING,
            prevention: AIRFLOW_SPRAY,
            severity: Severity::Medium,
        },
    ),
    ("Cherry___healthy", healthy("Healthy cherry")),
    (
        "Corn___Cercospora_leaf_spot Gray_leaf_spot",
        DiseaseInfo {
            name: "Corn gray leaf spot",
            description: "Fungal disease of corn leaves, marked by gray lesions.",
            symptoms: &[
                "Gray spots on leaves",
                "Leaf drop in severe cases",
                "Reduced yield",
            ],
            treatment: LEAF_REMOVAL_SPACING,
            prevention: AIRFLOW_SPRAY,
            severity: Severity::Medium,
        },
    ),
    (
        "Corn___Common_rust",
        DiseaseInfo {
            name: "Corn common rust",
            description: "Rust disease of corn leaves, marked by orange pustules.",
            symptoms: &[
                "Orange spots on leaves",
                "Leaf drop in severe cases",
                "Reduced yield",
            ],
            treatment: LEAF_REMOVAL_SPACING,
            prevention: AIRFLOW_SPRAY,
            severity: Severity::Medium,
        },
    ),
    (
        "Corn___Northern_Leaf_Blight",
        DiseaseInfo {
            name: "Corn northern leaf blight",
            description: "Fungal disease of corn leaves, marked by long brown lesions.",
            symptoms: &[
                "Long brown lesions on leaves",
                "Leaf drop in severe cases",
                "Reduced yield",
            ],
            treatment: LEAF_REMOVAL_SPACING,
            prevention: AIRFLOW_SPRAY,
            severity: Severity::Medium,
        },
    ),
    ("Corn___healthy", healthy("Healthy corn")),
    (
        "Cucumber___Downy_mildew",
        DiseaseInfo {
            name: "Cucumber downy mildew",
            description: "Fungal disease of cucumber leaves, marked by yellow spots and gray mold.",
            symptoms: &[
                "Yellow spots on leaves",
                "Gray mold on leaf undersides",
                "Leaf drop in severe cases",
            ],
            treatment: LEAF_REMOVAL_SPACING,
            prevention: AIRFLOW_SPRAY,
            severity: Severity::Medium,
        },
    ),
    ("Cucumber___Healthy", healthy("Healthy cucumber")),
    (
        "Cucumber___Powdery_mildew",
        DiseaseInfo {
            name: "Cucumber powdery mildew",
            description: "Fungal disease of cucumber leaves, marked by a white powdery coating.",
            symptoms: &[
                "White powder on leaves",
                "Twisted leaves",
                "Leaf drop in severe cases",
            ],
            treatment: LEAF_REMOVAL_SPACING,
            prevention: AIRFLOW_SPRAY,
            severity: Severity::Medium,
        },
    ),
    (
        "Grape___Black_rot",
        DiseaseInfo {
            name: "Grape black rot",
            description: "Serious fungal disease of grape leaves and fruit.",
            symptoms: &[
                "Brown spots on leaves",
                "Black rot on fruit",
                "General wilting",
            ],
            treatment: LEAF_FRUIT_REMOVAL_PRUNING,
            prevention: AIRFLOW_SPRAY,
            severity: Severity::High,
        },
    ),
    (
        "Grape___Esca_(Black_Measles)",
        DiseaseInfo {
            name: "Grape esca (black measles)",
            description: "Serious fungal disease of grape trunks and leaves.",
            symptoms: &[
                "Cankers on the trunk",
                "Yellow spots on leaves",
                "General wilting",
            ],
            treatment: PART_REMOVAL_DISINFECT,
            prevention: &[
                "Prune properly",
                "Apply fungicide regularly",
                "Use healthy seedlings",
            ],
            severity: Severity::High,
        },
    ),
    (
        "Grape___Leaf_blight_(Isariopsis_Leaf_Spot)",
        DiseaseInfo {
            name: "Grape leaf blight",
            description: "Fungal disease of grape leaves, marked by brown spots.",
            symptoms: &[
                "Brown spots on leaves",
                "Leaf drop in severe cases",
                "Reduced yield",
            ],
            treatment: &[
                "Remove infected leaves",
                "Apply fungicide",
                "Prune properly",
            ],
            prevention: AIRFLOW_SPRAY,
            severity: Severity::Medium,
        },
    ),
    ("Grape___healthy", healthy("Healthy grape")),
    (
        "Orange___Haunglongbing_(Citrus_greening)",
        DiseaseInfo {
            name: "Citrus greening (huanglongbing)",
            description: "Serious bacterial disease of orange trees that turns leaves yellow.",
            symptoms: &[
                "Yellowing leaves",
                "Small fruit",
                "General wilting",
            ],
            treatment: &[
                "Remove infected trees",
                "Apply bactericide",
                "Disinfect the whole tree",
            ],
            prevention: VIRUS_PREVENTION,
            severity: Severity::High,
        },
    ),
    (
        "Peach___Bacterial_spot",
        DiseaseInfo {
            name: "Peach bacterial spot",
            description: "Bacterial disease of peach leaves and fruit.",
            symptoms: &[
                "Brown spots on leaves",
                "Scab-like lesions on fruit",
                "Leaf drop in severe cases",
            ],
            treatment: LEAF_FRUIT_REMOVAL_PRUNING,
            prevention: AIRFLOW_SPRAY,
            severity: Severity::Medium,
        },
    ),
    ("Peach___healthy", healthy("Healthy peach")),
    (
        "Pepper,_bell___Bacterial_spot",
        DiseaseInfo {
            name: "Bell pepper bacterial spot",
            description: "Bacterial disease of bell pepper leaves and fruit.",
            symptoms: &[
                "Brown spots on leaves",
                "Scab-like lesions on fruit",
                "Leaf drop in severe cases",
            ],
            treatment: LEAF_FRUIT_REMOVAL_SPACING,
            prevention: AIRFLOW_SPRAY,
            severity: Severity::Medium,
        },
    ),
    ("Pepper,_bell___healthy", healthy("Healthy bell pepper")),
    (
        "Potato___Early_blight",
        DiseaseInfo {
            name: "Potato early blight",
            description: "Fungal disease of potato leaves, marked by concentric ring spots.",
            symptoms: &[
                "Concentric ring spots on leaves",
                "Leaf drop in severe cases",
                "Reduced yield",
            ],
            treatment: LEAF_REMOVAL_SPACING,
            prevention: AIRFLOW_SPRAY,
            severity: Severity::Medium,
        },
    ),
    (
        "Potato___Late_blight",
        DiseaseInfo {
            name: "Potato late blight",
            description: "Serious fungal disease of potato leaves and stems.",
            symptoms: &[
                "Water-soaked spots on leaves",
                "Brown spots on stems",
                "General wilting",
            ],
            treatment: PLANT_REMOVAL_SOIL,
            prevention: AIRFLOW_SPRAY,
            severity: Severity::High,
        },
    ),
    ("Potato___healthy", healthy("Healthy potato")),
    ("Raspberry___healthy", healthy("Healthy raspberry")),
    (
        "Rice___Bacterial_Leaf_Blight",
        DiseaseInfo {
            name: "Rice bacterial leaf blight",
            description: "Serious bacterial disease of rice leaves.",
            symptoms: &[
                "Yellow spots on leaves",
                "Leaves dry out in severe cases",
                "Reduced yield",
            ],
            treatment: LEAF_REMOVAL_SPACING,
            prevention: AIRFLOW_SPRAY,
            severity: Severity::High,
        },
    ),
    (
        "Rice___Brown_Spot",
        DiseaseInfo {
            name: "Rice brown spot",
            description: "Fungal disease of rice leaves, marked by brown spots.",
            symptoms: &[
                "Brown spots on leaves",
                "Leaf drop in severe cases",
                "Reduced yield",
            ],
            treatment: LEAF_REMOVAL_SPACING,
            prevention: AIRFLOW_SPRAY,
            severity: Severity::Medium,
        },
    ),
    ("Rice___Healthy", healthy("Healthy rice")),
    (
        "Rice___Leaf_Blast",
        DiseaseInfo {
            name: "Rice blast",
            description: "Serious fungal disease of rice leaves.",
            symptoms: &[
                "Diamond-shaped spots on leaves",
                "Leaves dry out in severe cases",
                "Reduced yield",
            ],
            treatment: LEAF_REMOVAL_SPACING,
            prevention: AIRFLOW_SPRAY,
            severity: Severity::High,
        },
    ),
    (
        "Rice___Leaf_Scald",
        DiseaseInfo {
            name: "Rice leaf scald",
            description: "Fungal disease of rice leaves that dries out the leaf margins.",
            symptoms: &[
                "Dry leaf margins",
                "Leaves dry out in severe cases",
                "Reduced yield",
            ],
            treatment: LEAF_REMOVAL_SPACING,
            prevention: AIRFLOW_SPRAY,
            severity: Severity::Medium,
        },
    ),
    (
        "Rice___Sheath_Blight",
        DiseaseInfo {
            name: "Rice sheath blight",
            description: "Fungal disease of the rice leaf sheath.",
            symptoms: &[
                "Brown spots on leaf sheaths",
                "Leaves dry out in severe cases",
                "Reduced yield",
            ],
            treatment: LEAF_REMOVAL_SPACING,
            prevention: AIRFLOW_SPRAY,
            severity: Severity::Medium,
        },
    ),
    ("Soybean___healthy", healthy("Healthy soybean")),
    (
        "Squash___Powdery_mildew",
        DiseaseInfo {
            name: "Squash powdery mildew",
            description: "Fungal disease of squash leaves, marked by a white powdery coating.",
            symptoms: &[
                "White powder on leaves",
                "Twisted leaves",
                "Leaf drop in severe cases",
            ],
            treatment: LEAF_REMOVAL_SPACING,
            prevention: AIRFLOW_SPRAY,
            severity: Severity::Medium,
        },
    ),
    (
        "Strawberry___Leaf_scorch",
        DiseaseInfo {
            name: "Strawberry leaf scorch",
            description: "Fungal disease of strawberry leaves that dries out the leaf margins.",
            symptoms: &[
                "Dry leaf margins",
                "Leaves dry out in severe cases",
                "Reduced yield",
            ],
            treatment: LEAF_REMOVAL_SPACING,
            prevention: AIRFLOW_SPRAY,
            severity: Severity::Medium,
        },
    ),
    ("Strawberry___healthy", healthy("Healthy strawberry")),
    (
        "Tomato___Bacterial_spot",
        DiseaseInfo {
            name: "Tomato bacterial spot",
            description: "Bacterial disease of tomato leaves and fruit.",
            symptoms: &[
                "Brown spots on leaves",
                "Scab-like lesions on fruit",
                "Leaf drop in severe cases",
            ],
            treatment: LEAF_FRUIT_REMOVAL_SPACING,
            prevention: AIRFLOW_SPRAY,
            severity: Severity::Medium,
        },
    ),
    (
        "Tomato___Early_blight",
        DiseaseInfo {
            name: "Tomato early blight",
            description: "Fungal disease of tomato leaves and stems, marked by concentric ring spots.",
            symptoms: &[
                "Concentric ring spots on leaves",
                "Brown spots on stems",
                "Leaf drop in severe cases",
            ],
            treatment: LEAF_REMOVAL_SPACING,
            prevention: AIRFLOW_SPRAY,
            severity: Severity::Medium,
        },
    ),
    (
        "Tomato___Late_blight",
        DiseaseInfo {
            name: "Tomato late blight",
            description: "Serious fungal disease of tomato leaves and fruit.",
            symptoms: &[
                "Water-soaked spots on leaves",
                "Brown rot on fruit",
                "General wilting",
            ],
            treatment: PLANT_REMOVAL_SOIL,
            prevention: AIRFLOW_SPRAY,
            severity: Severity::High,
        },
    ),
    (
        "Tomato___Leaf_Mold",
        DiseaseInfo {
            name: "Tomato leaf mold",
            description: "Fungal disease of tomato leaves, marked by yellow spots and gray mold.",
            symptoms: &[
                "Yellow spots on leaves",
                "Gray mold on leaf undersides",
                "Leaf drop in severe cases",
            ],
            treatment: LEAF_REMOVAL_SPACING,
            prevention: AIRFLOW_SPRAY,
            severity: Severity::Medium,
        },
    ),
    (
        "Tomato___Septoria_leaf_spot",
        DiseaseInfo {
            name: "Tomato septoria leaf spot",
            description: "Fungal disease of tomato leaves, marked by small brown spots.",
            symptoms: &[
                "Small brown spots on leaves",
                "Leaf drop in severe cases",
                "Reduced yield",
            ],
            treatment: LEAF_REMOVAL_SPACING,
            prevention: AIRFLOW_SPRAY,
            severity: Severity::Medium,
        },
    ),
    (
        "Tomato___Spider_mites Two-spotted_spider_mite",
        DiseaseInfo {
            name: "Tomato spider mites",
            description: "Pest that feeds on tomato leaves.",
            symptoms: &[
                "Tiny spots on leaves",
                "Yellowing leaves",
                "Fine webbing",
            ],
            treatment: &[
                "Apply insecticide",
                "Remove infested leaves",
                "Keep proper plant spacing",
            ],
            prevention: &[
                "Keep proper plant spacing",
                "Apply insecticide regularly",
                "Use healthy seedlings",
            ],
            severity: Severity::Medium,
        },
    ),
    (
        "Tomato___Target_Spot",
        DiseaseInfo {
            name: "Tomato target spot",
            description: "Fungal disease of tomato leaves, marked by target-shaped spots.",
            symptoms: &[
                "Target-shaped spots on leaves",
                "Leaf drop in severe cases",
                "Reduced yield",
            ],
            treatment: LEAF_REMOVAL_SPACING,
            prevention: AIRFLOW_SPRAY,
            severity: Severity::Medium,
        },
    ),
    (
        "Tomato___Tomato_Yellow_Leaf_Curl_Virus",
        DiseaseInfo {
            name: "Tomato yellow leaf curl virus",
            description: "Viral disease that yellows and curls tomato leaves.",
            symptoms: &[
                "Yellowing leaves",
                "Curling leaves",
                "General wilting",
            ],
            treatment: VIRUS_TREATMENT,
            prevention: VIRUS_PREVENTION,
            severity: Severity::High,
        },
    ),
    (
        "Tomato___Tomato_mosaic_virus",
        DiseaseInfo {
            name: "Tomato mosaic virus",
            description: "Viral disease that leaves a mosaic pattern on tomato leaves.",
            symptoms: &[
                "Mosaic pattern on leaves",
                "Twisted leaves",
                "General wilting",
            ],
            treatment: VIRUS_TREATMENT,
            prevention: VIRUS_PREVENTION,
            severity: Severity::High,
        },
    ),
    ("Tomato___healthy", healthy("Healthy tomato")),
];
