use serde::{Deserialize, Serialize};

/// Column names of the tabular export, in field order.
pub const COLUMNS: [&str; 8] = [
    "Screen_Section",
    "Component",
    "Description",
    "Mobile_UX_Treatment",
    "Visual_Design",
    "Interaction_Pattern",
    "Data_Source",
    "Premium_Indicator",
];

/// One UI component of the Business 360 screen.
///
/// Rows are independent descriptive records. Their order only matters for
/// display and export; nothing is derived from or enforced across them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatureRow {
    #[serde(rename = "Screen_Section")]
    pub screen_section: String,
    #[serde(rename = "Component")]
    pub component: String,
    #[serde(rename = "Description")]
    pub description: String,
    #[serde(rename = "Mobile_UX_Treatment")]
    pub mobile_ux_treatment: String,
    #[serde(rename = "Visual_Design")]
    pub visual_design: String,
    #[serde(rename = "Interaction_Pattern")]
    pub interaction_pattern: String,
    #[serde(rename = "Data_Source")]
    pub data_source: String,
    #[serde(rename = "Premium_Indicator")]
    pub premium_indicator: String,
}

impl FeatureRow {
    /// Build a row from its eight fields, given in [`COLUMNS`] order.
    pub fn from_fields(fields: [&str; 8]) -> Self {
        let [
            screen_section,
            component,
            description,
            mobile_ux_treatment,
            visual_design,
            interaction_pattern,
            data_source,
            premium_indicator,
        ] = fields.map(str::to_string);
        Self {
            screen_section,
            component,
            description,
            mobile_ux_treatment,
            visual_design,
            interaction_pattern,
            data_source,
            premium_indicator,
        }
    }

    /// The row's fields in [`COLUMNS`] order.
    pub fn fields(&self) -> [&str; 8] {
        [
            &self.screen_section,
            &self.component,
            &self.description,
            &self.mobile_ux_treatment,
            &self.visual_design,
            &self.interaction_pattern,
            &self.data_source,
            &self.premium_indicator,
        ]
    }
}
