use chrono::{DateTime, Utc};
use sea_orm::ActiveValue::Set;
use sea_orm::entity::prelude::*;
use sea_orm::{ColumnTrait, QueryFilter};
use serde::{Deserialize, Serialize};

/// Represents a course in the `courses` table.
///
/// `bootcamp_id` and `user_id` are fixed at creation: the parent bootcamp
/// comes from the request path and the creating account from the
/// authenticated caller. Neither is writable through the API afterwards.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Deserialize, Serialize)]
#[sea_orm(table_name = "courses")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,

    pub bootcamp_id: i64,
    pub user_id: i64,

    pub title: String,
    pub description: String,
    pub weeks: i32,
    pub tuition: f64,
    pub minimum_skill: String,
    pub scholarship_available: bool,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::bootcamp::Entity",
        from = "Column::BootcampId",
        to = "super::bootcamp::Column::Id",
        on_delete = "Cascade"
    )]
    Bootcamp,

    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id",
        on_delete = "Cascade"
    )]
    User,
}

impl Related<super::bootcamp::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Bootcamp.def()
    }
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    #[allow(clippy::too_many_arguments)]
    pub async fn create(
        db: &DbConn,
        bootcamp_id: i64,
        user_id: i64,
        title: &str,
        description: &str,
        weeks: i32,
        tuition: f64,
        minimum_skill: &str,
        scholarship_available: bool,
    ) -> Result<Model, DbErr> {
        let now = Utc::now();
        let course = ActiveModel {
            bootcamp_id: Set(bootcamp_id),
            user_id: Set(user_id),
            title: Set(title.to_owned()),
            description: Set(description.to_owned()),
            weeks: Set(weeks),
            tuition: Set(tuition),
            minimum_skill: Set(minimum_skill.to_owned()),
            scholarship_available: Set(scholarship_available),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        course.insert(db).await
    }

    pub async fn get_by_id(db: &DbConn, id: i64) -> Result<Option<Model>, DbErr> {
        Entity::find_by_id(id).one(db).await
    }

    pub async fn find_by_bootcamp(db: &DbConn, bootcamp_id: i64) -> Result<Vec<Model>, DbErr> {
        Entity::find()
            .filter(Column::BootcampId.eq(bootcamp_id))
            .all(db)
            .await
    }

    pub async fn delete(db: &DbConn, id: i64) -> Result<(), DbErr> {
        Entity::delete_by_id(id).exec(db).await?;
        Ok(())
    }
}
