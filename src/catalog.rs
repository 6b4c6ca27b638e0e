//! The literal Business 360 feature table.

use crate::models::FeatureRow;

/// Number of rows in the feature table.
pub const FEATURE_ROW_COUNT: usize = ROWS.len();

// Fields per row follow `models::COLUMNS`.
const ROWS: [[&str; 8]; 17] = [
    [
        "Navigation (Sidebar)",
        "Sidebar Menu Item",
        "\"Business 360\" tab in left sidebar navigation",
        "Fixed sidebar, collapsible on mobile, \"Business 360\" icon with notification badge",
        "Teal icon (#21808D), white text on dark bg",
        "Tap to navigate, active state highlighted",
        "Static navigation config",
        "None (always visible)",
    ],
    [
        "Hero Section (Top 40%)",
        "Cash Flow Graph",
        "Interactive line/area chart showing 30-day cash flow trend from PNC only",
        "Full-width interactive chart, pinch-to-zoom, swipe for date range",
        "Gradient blue-to-teal line, grid background, axis labels",
        "Tap data point for details tooltip, swipe for date range",
        "PNC Bank API (real-time transaction data)",
        "Free tier (PNC only)",
    ],
    [
        "Hero Section (Top 40%)",
        "Account Filter Badge",
        "Badge showing \"PNC Bank Only\" with info icon",
        "Top-right corner badge, tappable for account details",
        "Light gray pill badge with PNC logo",
        "Tap badge to see account connection settings",
        "Connected accounts metadata",
        "Free tier indicator",
    ],
    [
        "Hero Section (Top 40%)",
        "Time Period Selector",
        "Toggle between 7D, 30D, 90D, 1Y views",
        "Horizontal scrolling pill selector, smooth animations",
        "Pills with active state (teal bg), inactive (gray outline)",
        "Tap pill to change time period, smooth transition",
        "User preference (default: 30D)",
        "Free tier (always visible)",
    ],
    [
        "Insights Panel (Middle 35%)",
        "Generic Insight Card 1",
        "Alert: \"Low balance detected - Consider moving $5K from savings\"",
        "Card with icon, bold headline, expandable detail",
        "Yellow warning icon, white card bg, 12px padding",
        "Tap to expand full recommendation details",
        "ML model analyzing PNC transaction patterns",
        "Free tier (generic)",
    ],
    [
        "Insights Panel (Middle 35%)",
        "Generic Insight Card 2",
        "Info: \"Your average daily balance is 15% higher than last month\"",
        "Card with icon, bold headline, expandable detail",
        "Blue info icon, white card bg, 12px padding",
        "Tap to expand historical comparison view",
        "Calculated from PNC historical balances",
        "Free tier (generic)",
    ],
    [
        "Insights Panel (Middle 35%)",
        "Generic Insight Card 3",
        "Warning: \"3 upcoming payments totaling $12,500 in next 7 days\"",
        "Card with icon, bold headline, expandable detail",
        "Orange alert icon, white card bg, 12px padding",
        "Tap to see payment schedule detail",
        "PNC scheduled transaction data",
        "Free tier (generic)",
    ],
    [
        "Insights Panel (Middle 35%)",
        "View All Insights Link",
        "Link to full insights dashboard",
        "Small text link with chevron icon",
        "Small gray text, right arrow icon",
        "Tap to navigate to insights dashboard",
        "Internal routing",
        "Free tier (always visible)",
    ],
    [
        "Upgrade CTA (Bottom 25%)",
        "Upgrade Banner Container",
        "Premium tier promotion box with gradient background",
        "Sticky card with rounded corners, shadow, gradient bg",
        "Gradient teal-to-blue bg, white text, 16px padding",
        "Visible when scrolling, persistent on screen",
        "Marketing content + feature flags",
        "UPGRADE PROMPT",
    ],
    [
        "Upgrade CTA (Bottom 25%)",
        "Unlock Premium Features CTA",
        "Headline + subtitle explaining multi-bank benefits",
        "Large heading + 2-3 line description",
        "Bold 18px headline, 14px description text",
        "Tap \"Learn More\" to see feature comparison",
        "Static copy with dynamic benefit calculations",
        "UPGRADE PROMPT",
    ],
    [
        "Upgrade CTA (Bottom 25%)",
        "Bank Connection Button",
        "Primary action button to connect additional banks",
        "Full-width primary button, prominent placement",
        "Teal button (#21808D), white text, rounded 8px",
        "Tap to initiate bank connection flow (Plaid)",
        "Plaid integration or OAuth flow",
        "UPGRADE PROMPT",
    ],
    [
        "Feature Cards (Below fold)",
        "Real-Time Balance Card",
        "View all account balances in real-time across banks",
        "Scrollable card, swipe between accounts",
        "White card, account logo, balance in large text",
        "Tap to see transaction list, swipe to refresh",
        "Connected bank APIs (real-time)",
        "Premium feature (multi-bank)",
    ],
    [
        "Feature Cards (Below fold)",
        "AI Forecasting Card",
        "7-30 day ML-powered cash flow predictions",
        "Card with chart preview, tap to expand",
        "Chart icon, forecast range displayed",
        "Tap to see detailed forecast breakdown",
        "ML forecasting engine",
        "Premium feature",
    ],
    [
        "Feature Cards (Below fold)",
        "Payment Processing Card",
        "ACH, wire, mobile check deposit, recurring payments",
        "Card with quick actions, tap to process payment",
        "Dollar icon, payment type badges",
        "Tap to quick-process saved payment",
        "Payment processing service APIs",
        "Free tier (basic)",
    ],
    [
        "Feature Cards (Below fold)",
        "Fraud Detection Card",
        "Positive Pay for checks & ACH, anomaly detection",
        "Card with status indicators, tap for details",
        "Shield icon, security status indicator",
        "Tap to review fraud alerts, swipe to dismiss",
        "Fraud detection ML model",
        "Premium feature",
    ],
    [
        "Feature Cards (Below fold)",
        "Receivables Management Card",
        "Automated invoicing, payment links, reminders",
        "Card with invoice list, tap to manage",
        "Invoice icon, count badge",
        "Tap to send invoice, swipe to see aging",
        "Invoice management system",
        "Premium feature",
    ],
    [
        "Feature Cards (Below fold)",
        "Advanced Analytics Card",
        "Expense categorization, budgets, trends",
        "Card with expense breakdown, tap for full analytics",
        "Pie chart icon, category breakdown",
        "Tap to see full expense report by category",
        "Expense categorization engine",
        "Premium feature",
    ],
];

/// Returns the fixed feature table, in export order.
pub fn build_feature_table() -> Vec<FeatureRow> {
    ROWS.iter().copied().map(FeatureRow::from_fields).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_has_seventeen_rows() {
        assert_eq!(build_feature_table().len(), 17);
        assert_eq!(FEATURE_ROW_COUNT, 17);
    }

    #[test]
    fn test_no_field_is_empty() {
        for row in build_feature_table() {
            for field in row.fields() {
                assert!(!field.trim().is_empty(), "empty field in {:?}", row.component);
            }
        }
    }

    #[test]
    fn test_first_and_last_rows() {
        let rows = build_feature_table();
        assert_eq!(rows[0].component, "Sidebar Menu Item");
        assert_eq!(rows[0].premium_indicator, "None (always visible)");
        assert_eq!(rows[16].component, "Advanced Analytics Card");
        assert_eq!(rows[16].screen_section, "Feature Cards (Below fold)");
    }

    #[test]
    fn test_upgrade_section_rows_are_prompts() {
        let prompts: Vec<_> = build_feature_table()
            .into_iter()
            .filter(|r| r.screen_section == "Upgrade CTA (Bottom 25%)")
            .collect();
        assert_eq!(prompts.len(), 3);
        assert!(prompts.iter().all(|r| r.premium_indicator == "UPGRADE PROMPT"));
    }
}
