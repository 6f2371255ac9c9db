//! 静的ページの掲載内容

pub struct Feature {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub const BENEFITS: [Feature; 3] = [
    Feature {
        icon: "🛡️",
        title: "Allergy Protection",
        description: "Instantly detect allergens in products to keep you safe",
    },
    Feature {
        icon: "📈",
        title: "Health Optimization",
        description: "Make informed choices aligned with your health goals",
    },
    Feature {
        icon: "✅",
        title: "Smart Recommendations",
        description: "Discover healthier alternatives tailored to your preferences",
    },
];

pub const STEPS: [Feature; 3] = [
    Feature {
        icon: "👥",
        title: "Create Profile",
        description: "Set up your dietary preferences, allergies, and health goals",
    },
    Feature {
        icon: "🔍",
        title: "Scan Product",
        description: "Use our barcode scanner or manual input to analyze products",
    },
    Feature {
        icon: "📊",
        title: "Get Insights",
        description: "Receive personalized nutrition analysis and recommendations",
    },
];

pub const IMPACT: [Feature; 3] = [
    Feature {
        icon: "🙋",
        title: "Individuals",
        description: "Empowers individuals to make informed food choices based on their unique dietary needs and health goals.",
    },
    Feature {
        icon: "🩺",
        title: "Healthcare",
        description: "Supports healthcare professionals with data-driven insights for better patient dietary counseling.",
    },
    Feature {
        icon: "🌍",
        title: "Public Health",
        description: "Contributes to public health by promoting nutrition awareness and reducing food-related health issues.",
    },
];

pub const PROBLEMS: [&str; 4] = [
    "Complex ingredient lists and unclear labeling",
    "Hidden allergens in processed foods",
    "Lack of personalized nutrition guidance",
    "Time-consuming manual research",
];

pub const SOLUTIONS: [&str; 3] = [
    "AI-powered barcode scanning with real-time analysis",
    "Personalized allergen detection and warnings",
    "Smart recommendations based on health goals",
];

pub struct MarketStat {
    pub label: &'static str,
    pub value: &'static str,
    pub growth: &'static str,
}

pub const MARKET_STATS: [MarketStat; 4] = [
    MarketStat { label: "Global Nutrition Apps Market", value: "$4.2B", growth: "+15.3% CAGR" },
    MarketStat { label: "Food Allergy Population", value: "32M", growth: "US alone" },
    MarketStat { label: "Health-Conscious Consumers", value: "73%", growth: "Read labels" },
    MarketStat { label: "Mobile Health Users", value: "1.7B", growth: "Worldwide" },
];

pub const TECHNOLOGIES: [Feature; 8] = [
    Feature { icon: "🦀", title: "Rust", description: "Application core" },
    Feature { icon: "🍃", title: "Leptos", description: "Reactive web framework" },
    Feature { icon: "🕸️", title: "WebAssembly", description: "Runs in the browser" },
    Feature { icon: "🎨", title: "CSS", description: "Styling and themes" },
    Feature { icon: "🧩", title: "Serde", description: "Typed local storage" },
    Feature { icon: "🥫", title: "OpenFoodFacts API", description: "Product database" },
    Feature { icon: "📱", title: "ZXing", description: "Barcode scanning" },
    Feature { icon: "🧠", title: "AI/ML", description: "Recommendation engine" },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhaseStatus {
    Current,
    Planned,
    Future,
}

impl PhaseStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PhaseStatus::Current => "current",
            PhaseStatus::Planned => "planned",
            PhaseStatus::Future => "future",
        }
    }
}

pub struct RoadmapPhase {
    pub phase: &'static str,
    pub title: &'static str,
    pub timeline: &'static str,
    pub features: [&'static str; 4],
    pub status: PhaseStatus,
}

pub const ROADMAP: [RoadmapPhase; 3] = [
    RoadmapPhase {
        phase: "MVP",
        title: "Core Functionality",
        timeline: "Q1 2025",
        features: ["Barcode scanning", "Basic nutrition analysis", "Allergen detection", "Profile management"],
        status: PhaseStatus::Current,
    },
    RoadmapPhase {
        phase: "V2",
        title: "Enhanced Features",
        timeline: "Q2 2025",
        features: ["AI recommendations", "OCR label scanning", "Shopping lists", "Meal planning"],
        status: PhaseStatus::Planned,
    },
    RoadmapPhase {
        phase: "V3",
        title: "Advanced Platform",
        timeline: "Q3-Q4 2025",
        features: ["Healthcare integration", "Social features", "IoT connectivity", "Global expansion"],
        status: PhaseStatus::Future,
    },
];

pub struct TeamMember {
    pub name: &'static str,
    pub role: &'static str,
    pub bio: &'static str,
    pub skills: [&'static str; 5],
    pub image: &'static str,
    pub email: &'static str,
}

pub const TEAM: [TeamMember; 4] = [
    TeamMember {
        name: "Alex Chen",
        role: "Lead Developer & Project Manager",
        bio: "Full-stack developer with expertise in React, Node.js, and machine learning. Passionate about creating user-centric health applications.",
        skills: ["React", "Node.js", "TypeScript", "Machine Learning", "Project Management"],
        image: "https://images.pexels.com/photos/4307869/pexels-photo-4307869.jpeg?auto=compress&cs=tinysrgb&w=300",
        email: "alex.chen@foodscan.app",
    },
    TeamMember {
        name: "Sarah Williams",
        role: "UX/UI Designer",
        bio: "Creative designer focused on accessibility and user experience. Specializes in creating intuitive interfaces for health and wellness apps.",
        skills: ["UI/UX Design", "Figma", "User Research", "Accessibility", "Design Systems"],
        image: "https://images.pexels.com/photos/4307875/pexels-photo-4307875.jpeg?auto=compress&cs=tinysrgb&w=300",
        email: "sarah.williams@foodscan.app",
    },
    TeamMember {
        name: "Dr. Michael Rodriguez",
        role: "Nutrition Research Specialist",
        bio: "PhD in Nutritional Science with 10+ years of experience in dietary research. Ensures scientific accuracy in nutrition analysis algorithms.",
        skills: ["Nutritional Science", "Data Analysis", "Research", "Algorithm Design", "Health Policy"],
        image: "https://images.pexels.com/photos/4307901/pexels-photo-4307901.jpeg?auto=compress&cs=tinysrgb&w=300",
        email: "michael.rodriguez@foodscan.app",
    },
    TeamMember {
        name: "Emily Zhang",
        role: "Backend Developer",
        bio: "Backend specialist with expertise in API development, database optimization, and cloud infrastructure. Ensures scalable and secure systems.",
        skills: ["Python", "PostgreSQL", "AWS", "API Development", "DevOps"],
        image: "https://images.pexels.com/photos/4307884/pexels-photo-4307884.jpeg?auto=compress&cs=tinysrgb&w=300",
        email: "emily.zhang@foodscan.app",
    },
];

pub const ACHIEVEMENTS: [Feature; 3] = [
    Feature { icon: "🏆", title: "Best Innovation Award", description: "University Tech Showcase 2024" },
    Feature { icon: "🏆", title: "Featured Project", description: "Health Tech Conference 2024" },
    Feature { icon: "⭐", title: "Open Source Contribution", description: "500+ GitHub stars" },
];

pub struct Document {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub kind: &'static str,
    pub size: &'static str,
    /// 例: "24 pages" / "32 slides"
    pub length: &'static str,
}

pub const DOCUMENTS: [Document; 3] = [
    Document {
        icon: "📄",
        title: "Research Paper",
        description: "Comprehensive analysis of personalized nutrition and food scanning technologies",
        kind: "PDF",
        size: "2.4 MB",
        length: "24 pages",
    },
    Document {
        icon: "📘",
        title: "Technical Specification",
        description: "Detailed technical documentation including API specifications and architecture",
        kind: "PDF",
        size: "1.8 MB",
        length: "18 pages",
    },
    Document {
        icon: "🎞️",
        title: "Project Presentation",
        description: "PowerPoint presentation covering project overview, methodology, and results",
        kind: "PPTX",
        size: "15.2 MB",
        length: "32 slides",
    },
];

pub struct Section {
    pub title: &'static str,
    pub content: &'static str,
}

pub const RESEARCH_SECTIONS: [Section; 4] = [
    Section {
        title: "Abstract",
        content: "This project addresses the growing need for personalized nutrition guidance through the development of an intelligent food scanning application. By leveraging barcode scanning technology, comprehensive food databases, and machine learning algorithms, we provide users with instant, personalized nutrition insights tailored to their dietary restrictions, health goals, and preferences.",
    },
    Section {
        title: "Methodology",
        content: "Our approach combines computer vision for barcode recognition, API integration with nutrition databases, and rule-based recommendation systems. The application is organized in three tiers: a presentation layer running in the browser, a shared core for profile and product logic, and a data layer for product database integration.",
    },
    Section {
        title: "Key Findings",
        content: "Initial user testing revealed a 89% accuracy rate in allergen detection and a 94% user satisfaction score for recommendation relevance. The application successfully reduced food choice decision time by an average of 3.2 minutes per product, demonstrating significant practical value.",
    },
    Section {
        title: "Future Work",
        content: "Planned enhancements include machine learning-based recommendation improvement, OCR integration for ingredient label scanning, IoT device connectivity, and expansion to include restaurant menu analysis and meal planning capabilities.",
    },
];
