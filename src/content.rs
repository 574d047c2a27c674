//! Static marketing content for the landing page. Nothing here is mutated at
//! runtime; the page just iterates over these tables.

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum FeatureIcon {
    Code,
    Mentor,
    Collaboration,
    Insights,
}

#[derive(Clone, Copy, PartialEq)]
pub struct Feature {
    pub icon: FeatureIcon,
    pub title: &'static str,
    pub description: &'static str,
    pub extended_desc: &'static str,
}

#[derive(Clone, Copy, PartialEq)]
pub struct Testimonial {
    pub name: &'static str,
    pub role: &'static str,
    pub content: &'static str,
    pub avatar_url: &'static str,
    pub rating: u8,
}

#[derive(Clone, Copy, PartialEq)]
pub struct PricingPlan {
    pub name: &'static str,
    pub price: &'static str,
    pub period: &'static str,
    pub description: &'static str,
    pub features: &'static [&'static str],
    pub cta: &'static str,
    pub popular: bool,
}

#[derive(Clone, Copy, PartialEq)]
pub struct FaqEntry {
    pub question: &'static str,
    pub answer: &'static str,
}

#[derive(Clone, Copy, PartialEq)]
pub struct Stat {
    pub number: &'static str,
    pub label: &'static str,
}

pub const FEATURES: [Feature; 4] = [
    Feature {
        icon: FeatureIcon::Code,
        title: "Real-Time Coding Arena",
        description: "Collaborate live in a multi-language environment with integrated code execution.",
        extended_desc: "Support for 15+ programming languages with real-time syntax highlighting and collaborative editing.",
    },
    Feature {
        icon: FeatureIcon::Mentor,
        title: "Mock Interview Simulator",
        description: "Experience real interview pressure with timer, roles, and shared problems.",
        extended_desc: "Customizable interview scenarios with role-playing options and performance evaluation metrics.",
    },
    Feature {
        icon: FeatureIcon::Collaboration,
        title: "Live Collaboration",
        description: "Chat, share problems, and code together with peers and mentors.",
        extended_desc: "Integrated voice/video chat, screen sharing, and collaborative problem-solving tools.",
    },
    Feature {
        icon: FeatureIcon::Insights,
        title: "Performance Insights",
        description: "Track accuracy, speed, and improvements over time with detailed analytics.",
        extended_desc: "Comprehensive dashboards with skill progression tracking and personalized improvement recommendations.",
    },
];

pub const TESTIMONIALS: [Testimonial; 3] = [
    Testimonial {
        name: "Sarah Johnson",
        role: "Software Engineer at Google",
        content: "CodeQuest transformed my interview preparation. The mock interviews felt so real that my actual interview was a breeze!",
        avatar_url: "https://images.unsplash.com/photo-1494790108377-be9c29b29330?ixlib=rb-4.0.3&ixid=MnwxMjA3fDB8MHxwaG90by1wYWdlfHx8fGVufDB8fHx8&auto=format&fit=crop&w=1287&q=80",
        rating: 5,
    },
    Testimonial {
        name: "Michael Chen",
        role: "Frontend Developer at Meta",
        content: "The collaborative coding environment is incredible. I found an amazing study group through CodeQuest and we all got job offers!",
        avatar_url: "https://images.unsplash.com/photo-1507003211169-0a1dd7228f2d?ixlib=rb-4.0.3&ixid=MnwxMjA3fDB8MHxwaG90by1wYWdlfHx8fGVufDB8fHx8&auto=format&fit=crop&w=1287&q=80",
        rating: 5,
    },
    Testimonial {
        name: "Priya Sharma",
        role: "Computer Science Student",
        content: "As a student with limited resources, CodeQuest provided everything I needed to prepare for technical interviews without breaking the bank.",
        avatar_url: "https://images.unsplash.com/photo-1580489944761-15a19d654956?ixlib=rb-4.0.3&ixid=MnwxMjA3fDB8MHxwaG90by1wYWdlfHx8fGVufDB8fHx8&auto=format&fit=crop&w=1361&q=80",
        rating: 4,
    },
];

pub const PRICING_PLANS: [PricingPlan; 3] = [
    PricingPlan {
        name: "Starter",
        price: "Free",
        period: "forever",
        description: "Perfect for beginners getting started with coding interviews",
        features: &[
            "5 coding problems per week",
            "Basic collaboration tools",
            "Limited mock interviews",
            "Community support",
        ],
        cta: "Get Started",
        popular: false,
    },
    PricingPlan {
        name: "Professional",
        price: "$15",
        period: "per month",
        description: "For serious job seekers preparing for technical interviews",
        features: &[
            "Unlimited coding problems",
            "Advanced collaboration tools",
            "Unlimited mock interviews",
            "Basic analytics",
            "Priority support",
        ],
        cta: "Start Free Trial",
        popular: true,
    },
    PricingPlan {
        name: "Enterprise",
        price: "Custom",
        period: "per year",
        description: "For teams and organizations preparing together",
        features: &[
            "All Professional features",
            "Team management",
            "Custom problem sets",
            "Advanced analytics dashboard",
            "Dedicated success manager",
            "SSO integration",
        ],
        cta: "Contact Sales",
        popular: false,
    },
];

pub const FAQ_ENTRIES: [FaqEntry; 4] = [
    FaqEntry {
        question: "How does the real-time collaboration work?",
        answer: "Our platform uses operational transformation algorithms to enable seamless real-time collaboration. Multiple users can edit code simultaneously with changes synced instantly across all connected clients.",
    },
    FaqEntry {
        question: "What programming languages are supported?",
        answer: "We support all major programming languages including JavaScript, Python, Java, C++, C#, Ruby, Go, Rust, Swift, and more. Our environment includes syntax highlighting, code completion, and execution for each language.",
    },
    FaqEntry {
        question: "Can I use CodeQuest for team interviews?",
        answer: "Yes! Our Enterprise plan includes team management features that allow you to conduct mock interviews with multiple interviewers and evaluate candidates collaboratively.",
    },
    FaqEntry {
        question: "How do you ensure interview questions are relevant?",
        answer: "Our question library is curated by industry experts from top tech companies and updated regularly based on current interview trends. Users can also submit their own questions for community use.",
    },
];

pub const LOGOS: [&str; 6] = ["Google", "Microsoft", "Amazon", "Meta", "Netflix", "Apple"];

pub const STATS: [Stat; 4] = [
    Stat { number: "10K+", label: "Active Users" },
    Stat { number: "95%", label: "Success Rate" },
    Stat { number: "500+", label: "Coding Problems" },
    Stat { number: "24/7", label: "Availability" },
];

pub const MAX_RATING: u8 = 5;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ratings_stay_within_star_scale() {
        for t in &TESTIMONIALS {
            assert!(t.rating >= 1 && t.rating <= MAX_RATING, "{} has rating {}", t.name, t.rating);
        }
    }

    #[test]
    fn exactly_one_plan_is_highlighted() {
        let popular = PRICING_PLANS.iter().filter(|p| p.popular).count();
        assert_eq!(popular, 1);
    }

    #[test]
    fn every_plan_lists_features_and_a_cta() {
        for plan in &PRICING_PLANS {
            assert!(!plan.features.is_empty());
            assert!(!plan.cta.is_empty());
        }
    }
}
