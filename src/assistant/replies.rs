//! Canned replies
//!
//! The assistant answers from a fixed table. Rules are checked in order
//! against the lower-cased prompt and the first keyword hit wins.

use serde::Serialize;

/// Which canned reply a prompt maps to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Topic {
    Greeting,
    Portfolio,
    Carbon,
    Defi,
    Security,
    Market,
    Menu,
}

/// Button style of a suggested action
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ActionKind {
    Primary,
    Secondary,
    Warning,
}

/// Follow-up button attached to an assistant message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SuggestedAction {
    pub label: &'static str,
    pub action: &'static str,
    pub kind: ActionKind,
}

const fn primary(label: &'static str, action: &'static str) -> SuggestedAction {
    SuggestedAction {
        label,
        action,
        kind: ActionKind::Primary,
    }
}

const fn secondary(label: &'static str, action: &'static str) -> SuggestedAction {
    SuggestedAction {
        label,
        action,
        kind: ActionKind::Secondary,
    }
}

const fn warning(label: &'static str, action: &'static str) -> SuggestedAction {
    SuggestedAction {
        label,
        action,
        kind: ActionKind::Warning,
    }
}

/// A canned assistant message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Reply {
    pub topic: Topic,
    pub content: &'static str,
    pub actions: &'static [SuggestedAction],
}

pub const GREETING: Reply = Reply {
    topic: Topic::Greeting,
    content: "👋 Hello! I'm your AI-powered RWA & DeFi assistant. I can help you with wallet management, carbon credit trading, DeFi strategies, and security guidance. What would you like to explore today?",
    actions: &[
        primary("Check Portfolio", "portfolio"),
        secondary("Carbon Credits", "carbon"),
        secondary("DeFi Opportunities", "defi"),
    ],
};

const PORTFOLIO: Reply = Reply {
    topic: Topic::Portfolio,
    content: "📊 **Portfolio Analysis:**\n\n• **Total Value:** ₹2,34,567 (+15.3%)\n• **Carbon Credits:** 12,847 CCX tokens\n• **Risk Level:** Low-Medium\n• **Diversification:** Good across 3 RWA types\n\n**Recommendations:**\n✅ Consider staking 20% for 8% APY\n⚠️ Monitor carbon credit prices (volatile)\n💡 Add stablecoins for stability",
    actions: &[
        primary("Stake Tokens", "stake"),
        secondary("View Details", "details"),
    ],
};

const CARBON: Reply = Reply {
    topic: Topic::Carbon,
    content: "🌱 **Carbon Credits Overview:**\n\n• **Current Holdings:** 12,847 CCX tokens\n• **Market Price:** ₹18.45 per credit (+12.5%)\n• **Verified Projects:** Amazon Rainforest, Mangrove Restoration\n• **Retirement Status:** 0 credits retired\n\n**Market Insights:**\n📈 Strong demand from corporate buyers\n🔒 All credits verified via blockchain\n⚡ Instant trading available",
    actions: &[
        primary("Trade Credits", "trade"),
        warning("Retire Credits", "retire"),
        secondary("Market Analysis", "market"),
    ],
};

const DEFI: Reply = Reply {
    topic: Topic::Defi,
    content: "🚀 **DeFi Opportunities:**\n\n**High Yield Options:**\n• **Staking CCX:** 8.5% APY (Low Risk)\n• **Liquidity Pool:** CCX/USDC 12% APY (Medium Risk)\n• **Lending:** Supply USDC for 6% APY (Low Risk)\n\n**⚠️ Risk Assessment:**\n• Smart contract risks exist\n• Impermanent loss possible in LPs\n• Always DYOR before investing",
    actions: &[
        primary("Start Staking", "stake"),
        secondary("Join LP", "liquidity"),
        warning("Risk Analysis", "risk"),
    ],
};

const SECURITY: Reply = Reply {
    topic: Topic::Security,
    content: "🔐 **Security Best Practices:**\n\n**✅ Your Wallet Security:**\n• KYC Verified ✓\n• 2FA Enabled ✓\n• Hardware wallet recommended\n\n**🚨 Stay Safe:**\n• Never share private keys\n• Verify transaction details\n• Use official websites only\n• Enable transaction limits",
    actions: &[
        primary("Security Settings", "settings"),
        secondary("Learn More", "learn"),
    ],
};

const MARKET: Reply = Reply {
    topic: Topic::Market,
    content: "📈 **Live Market Data:**\n\n• **CCX Token:** ₹18.45 (+12.5%)\n• **24h Volume:** ₹7.7M\n• **Market Cap:** ₹142.9M\n• **Global Carbon Price:** $85/tonne\n\n**Trend Analysis:**\n🔥 Strong bullish momentum\n📊 Above 50-day moving average\n⚡ High trading volume",
    actions: &[
        primary("View Charts", "charts"),
        secondary("Set Alerts", "alerts"),
    ],
};

const MENU: Reply = Reply {
    topic: Topic::Menu,
    content: "I can help you with:\n\n🔹 **Wallet Management** - Check balances, send/receive tokens\n🔹 **Carbon Credits** - Trade, retire, or analyze your RWA tokens\n🔹 **DeFi Strategies** - Staking, lending, yield farming\n🔹 **Security Guidance** - Best practices and risk analysis\n🔹 **Market Insights** - Live prices and trend analysis\n\nWhat specific area interests you?",
    actions: &[
        primary("Portfolio Review", "portfolio"),
        secondary("Security Check", "security"),
    ],
};

/// Keyword rules in precedence order
pub const RULES: &[(&[&str], Reply)] = &[
    (&["portfolio", "balance"], PORTFOLIO),
    (&["carbon", "credit"], CARBON),
    (&["defi", "stake", "yield"], DEFI),
    (&["security", "safe"], SECURITY),
    (&["price", "market"], MARKET),
];

/// Pick the reply for a prompt
pub fn reply_for(prompt: &str) -> Reply {
    let lower = prompt.to_lowercase();
    RULES
        .iter()
        .find(|(keywords, _)| keywords.iter().any(|k| lower.contains(*k)))
        .map(|(_, reply)| *reply)
        .unwrap_or(MENU)
}

/// Prompt sent when a suggested action is clicked
pub fn prompt_for_action(action: &str) -> String {
    match action {
        "portfolio" => "Show me my complete portfolio analysis".to_string(),
        "carbon" => "Tell me about my carbon credits".to_string(),
        "defi" => "What DeFi opportunities are available?".to_string(),
        "stake" => "How can I stake my tokens safely?".to_string(),
        "security" => "Review my wallet security".to_string(),
        other => format!("Execute {}", other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyword_topics() {
        assert_eq!(reply_for("show my portfolio").topic, Topic::Portfolio);
        assert_eq!(reply_for("What's my BALANCE?").topic, Topic::Portfolio);
        assert_eq!(reply_for("carbon offsets").topic, Topic::Carbon);
        assert_eq!(reply_for("any yield here").topic, Topic::Defi);
        assert_eq!(reply_for("is it safe").topic, Topic::Security);
        assert_eq!(reply_for("Price check").topic, Topic::Market);
        assert_eq!(reply_for("hello there").topic, Topic::Menu);
    }

    #[test]
    fn test_first_rule_wins() {
        // "credit" and "market" both hit; carbon comes first
        assert_eq!(reply_for("credit market").topic, Topic::Carbon);
        assert_eq!(reply_for("portfolio security").topic, Topic::Portfolio);
        // "stake" sits inside "mistakes"
        assert_eq!(reply_for("common mistakes").topic, Topic::Defi);
    }

    #[test]
    fn test_action_prompts_route_back() {
        assert_eq!(
            reply_for(&prompt_for_action("portfolio")).topic,
            Topic::Portfolio
        );
        assert_eq!(reply_for(&prompt_for_action("carbon")).topic, Topic::Carbon);
        assert_eq!(reply_for(&prompt_for_action("defi")).topic, Topic::Defi);
        // "stake" is checked before "safe"
        assert_eq!(reply_for(&prompt_for_action("stake")).topic, Topic::Defi);
        assert_eq!(
            reply_for(&prompt_for_action("security")).topic,
            Topic::Security
        );
        assert_eq!(prompt_for_action("retire"), "Execute retire");
    }

    #[test]
    fn test_every_reply_has_actions() {
        for (_, reply) in RULES {
            assert!(!reply.actions.is_empty());
        }
        assert_eq!(GREETING.actions.len(), 3);
    }
}
