use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(24))")]
pub enum ToolCategory {
    #[sea_orm(string_value = "AI_ASSISTANT")]
    AiAssistant,
    #[sea_orm(string_value = "DESIGN")]
    Design,
    #[sea_orm(string_value = "DEVELOPMENT")]
    Development,
    #[sea_orm(string_value = "PRODUCTIVITY")]
    Productivity,
    #[sea_orm(string_value = "RESEARCH")]
    Research,
    #[sea_orm(string_value = "OTHER")]
    Other,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
pub enum ToolPricing {
    #[sea_orm(string_value = "FREE")]
    Free,
    #[sea_orm(string_value = "FREEMIUM")]
    Freemium,
    #[sea_orm(string_value = "PAID")]
    Paid,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(24))")]
pub enum ToolUsageStatus {
    #[sea_orm(string_value = "RECOMMENDED")]
    Recommended,
    #[sea_orm(string_value = "IN_EVALUATION")]
    InEvaluation,
    #[sea_orm(string_value = "COMMUNITY")]
    Community,
    #[sea_orm(string_value = "DEPRECATED")]
    Deprecated,
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "tool")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub category: ToolCategory,
    pub pricing: ToolPricing,
    pub usage_status: ToolUsageStatus,
    pub short_description: String,
    pub description: String,
    /// JSON array of badge labels.
    pub badges: Json,
    pub url: Option<String>,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::artifact_tool::Entity")]
    ArtifactTool,
}

impl Related<super::artifact_tool::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ArtifactTool.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
