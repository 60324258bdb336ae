use sea_orm::entity::prelude::*;

/// Role bound to exactly one auth token.
///
/// `token_id` is unique (a token has at most one role) and cascades on token
/// delete (a role never outlives its token).
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "auth_roles")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    /// Lowercase role name (`guest`, `user`, `owner`).
    pub role: String,
    #[sea_orm(unique)]
    pub token_id: Uuid,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::auth_tokens::Entity",
        from = "Column::TokenId",
        to = "super::auth_tokens::Column::Id",
        on_delete = "Cascade"
    )]
    Token,
}

impl Related<super::auth_tokens::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Token.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
