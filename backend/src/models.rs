use diesel::prelude::*;

#[derive(Queryable, Selectable, Insertable, Debug, Clone, PartialEq, Eq)]
#[diesel(table_name = crate::schema::player_skills)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct PlayerSkill {
    pub player_name: String,
    pub skill: String,
    pub rank: i64,
    pub level: i64,
    pub experience: i64,
}

#[derive(Queryable, Selectable, Insertable, Debug, Clone, PartialEq, Eq)]
#[diesel(table_name = crate::schema::player_activities)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct PlayerActivity {
    pub player_name: String,
    pub activity: String,
    pub rank: i64,
    pub score: i64,
}

#[derive(Queryable, Selectable, Insertable, Debug, Clone, PartialEq, Eq)]
#[diesel(table_name = crate::schema::player_overall_experience)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct OverallExperience {
    pub player_name: String,
    pub captured_at: chrono::NaiveDateTime,
    pub overall_experience: i64,
}

#[derive(Queryable, Selectable, Insertable, Debug, Clone, PartialEq, Eq)]
#[diesel(table_name = crate::schema::player_overall_pvm)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct PvmSnapshot {
    pub player_name: String,
    pub captured_at: chrono::NaiveDateTime,
    pub raids_total: i64,
    pub bosses_total: i64,
}

#[derive(Queryable, Selectable, Insertable, Debug, Clone, PartialEq, Eq)]
#[diesel(table_name = crate::schema::weekly_experience_summary)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct WeeklyExperienceSummary {
    pub player_name: String,
    pub week_start: chrono::NaiveDate,
    pub start_experience: i64,
    pub end_experience: i64,
    pub experience_gain: i64,
}

#[derive(Queryable, Selectable, Insertable, Debug, Clone, PartialEq, Eq)]
#[diesel(table_name = crate::schema::weekly_pvm_summary)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct WeeklyPvmSummary {
    pub player_name: String,
    pub week_start: chrono::NaiveDate,
    pub raids_start: i64,
    pub raids_end: i64,
    pub raids_increase: i64,
    pub bosses_start: i64,
    pub bosses_end: i64,
    pub bosses_increase: i64,
}
