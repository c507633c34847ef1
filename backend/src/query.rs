use diesel::prelude::*;
use diesel_async::RunQueryDsl;

#[derive(Debug)]
pub enum QueryError {
    Connection(diesel::ConnectionError),
    Load(diesel::result::Error),
}

impl From<diesel::ConnectionError> for QueryError {
    fn from(value: diesel::ConnectionError) -> Self {
        Self::Connection(value)
    }
}

impl From<diesel::result::Error> for QueryError {
    fn from(value: diesel::result::Error) -> Self {
        Self::Load(value)
    }
}

pub async fn player_state(
    player_name: &str,
) -> Result<(Vec<crate::models::PlayerSkill>, Vec<crate::models::PlayerActivity>), QueryError> {
    let mut db_con = crate::db_connection().await?;

    let skills = crate::schema::player_skills::dsl::player_skills
        .filter(crate::schema::player_skills::dsl::player_name.eq(player_name))
        .select(crate::models::PlayerSkill::as_select())
        .load(&mut db_con)
        .await?;

    let activities = crate::schema::player_activities::dsl::player_activities
        .filter(crate::schema::player_activities::dsl::player_name.eq(player_name))
        .select(crate::models::PlayerActivity::as_select())
        .load(&mut db_con)
        .await?;

    Ok((skills, activities))
}
