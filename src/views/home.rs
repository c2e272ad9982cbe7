//! Landing page

use serde::Serialize;

use crate::navigation::Section;

pub const HEADLINE: &str = "CarbonCredX";
pub const BADGE: &str = "Blockchain-Powered Carbon Trading";
pub const TAGLINE: &str = "The world's most advanced carbon credit tokenization platform. Verify, tokenize, and trade carbon credits with AI-powered verification, secure KYC, and blockchain technology.";
pub const CTA_TITLE: &str = "Ready to Tokenize Your Carbon Credits?";
pub const CTA_TEXT: &str = "Join thousands of users who trust CarbonCredX for secure, verified carbon credit tokenization and trading";
pub const FOOTER: &str = "Building the future of carbon credit trading with blockchain technology";

/// Section selected by "Get Started" and "Start Your Journey"
pub const GET_STARTED: Section = Section::Dashboard;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PlatformStat {
    pub label: &'static str,
    pub value: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Feature {
    pub title: &'static str,
    pub description: &'static str,
}

pub const STATS: [PlatformStat; 4] = [
    PlatformStat { label: "Carbon Credits Verified", value: "2.4M+" },
    PlatformStat { label: "Tokens Generated", value: "1.8M+" },
    PlatformStat { label: "Verified Users", value: "15K+" },
    PlatformStat { label: "Countries Supported", value: "25+" },
];

pub const FEATURES: [Feature; 6] = [
    Feature {
        title: "AI-Powered Verification",
        description: "Upload carbon credit certifications and get instant AI-powered verification with OCR and NLP technology",
    },
    Feature {
        title: "Secure KYC Process",
        description: "Complete KYC verification using Aadhaar, PAN, and biometric authentication for maximum security",
    },
    Feature {
        title: "Token Generation",
        description: "Automatically mint carbon credit tokens on blockchain with verified project metadata",
    },
    Feature {
        title: "Digital Wallet",
        description: "Manage your carbon tokens with a PhonePe-style wallet interface and real-time valuations",
    },
    Feature {
        title: "Real-Time Pricing",
        description: "Track carbon credit prices with live market data and detailed analytics",
    },
    Feature {
        title: "Token Explorer",
        description: "Explore token ownership, project details, and transfer history with our blockchain explorer",
    },
];
