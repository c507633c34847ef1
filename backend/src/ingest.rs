use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use futures::StreamExt;

#[derive(Debug)]
pub enum IngestError {
    Fetch(crate::hiscores::FetchError),
    Decode(decoder::feed::ParseError),
    Connection(diesel::ConnectionError),
    Persist(diesel::result::Error),
}

impl From<crate::hiscores::FetchError> for IngestError {
    fn from(value: crate::hiscores::FetchError) -> Self {
        Self::Fetch(value)
    }
}

impl From<decoder::feed::ParseError> for IngestError {
    fn from(value: decoder::feed::ParseError) -> Self {
        Self::Decode(value)
    }
}

impl From<diesel::ConnectionError> for IngestError {
    fn from(value: diesel::ConnectionError) -> Self {
        Self::Connection(value)
    }
}

impl From<diesel::result::Error> for IngestError {
    fn from(value: diesel::result::Error) -> Self {
        Self::Persist(value)
    }
}

#[tracing::instrument(skip(client))]
pub async fn ingest_player(
    client: &crate::hiscores::Client,
    player_name: &str,
) -> Result<(), IngestError> {
    let raw = client.fetch_player(player_name).await?;

    let snapshot = decoder::feed::parse(&raw)?;
    let totals = decoder::categories::pvm_totals(&snapshot.activities);

    tracing::debug!(
        "Decoded {} skill and {} activity lines",
        snapshot.skills.len(),
        snapshot.activities.len()
    );

    // Both history rows of one run share a single stamp
    let captured_at = chrono::Utc::now().naive_utc();

    let skill_rows = snapshot
        .skills
        .iter()
        .map(|entry| crate::models::PlayerSkill {
            player_name: player_name.to_owned(),
            skill: entry.skill.to_owned(),
            rank: entry.rank,
            level: entry.level,
            experience: entry.experience,
        })
        .collect::<Vec<_>>();

    let activity_rows = snapshot
        .activities
        .iter()
        .map(|entry| crate::models::PlayerActivity {
            player_name: player_name.to_owned(),
            activity: entry.activity.to_owned(),
            rank: entry.rank,
            score: entry.score,
        })
        .collect::<Vec<_>>();

    let experience_row = crate::models::OverallExperience {
        player_name: player_name.to_owned(),
        captured_at,
        overall_experience: snapshot.overall_experience,
    };

    let pvm_row = crate::models::PvmSnapshot {
        player_name: player_name.to_owned(),
        captured_at,
        raids_total: totals.raids,
        bosses_total: totals.bosses,
    };

    let mut db_con = crate::db_connection().await?;

    db_con
        .build_transaction()
        .run(|conn| {
            Box::pin(async move {
                let store_skills_query =
                    diesel::dsl::insert_into(crate::schema::player_skills::dsl::player_skills)
                        .values(skill_rows)
                        .on_conflict((
                            crate::schema::player_skills::dsl::player_name,
                            crate::schema::player_skills::dsl::skill,
                        ))
                        .do_update()
                        .set((
                            crate::schema::player_skills::dsl::rank.eq(diesel::upsert::excluded(
                                crate::schema::player_skills::dsl::rank,
                            )),
                            crate::schema::player_skills::dsl::level.eq(diesel::upsert::excluded(
                                crate::schema::player_skills::dsl::level,
                            )),
                            crate::schema::player_skills::dsl::experience.eq(
                                diesel::upsert::excluded(
                                    crate::schema::player_skills::dsl::experience,
                                ),
                            ),
                        ));
                store_skills_query.execute(conn).await?;

                if !activity_rows.is_empty() {
                    let store_activities_query = diesel::dsl::insert_into(
                        crate::schema::player_activities::dsl::player_activities,
                    )
                    .values(activity_rows)
                    .on_conflict((
                        crate::schema::player_activities::dsl::player_name,
                        crate::schema::player_activities::dsl::activity,
                    ))
                    .do_update()
                    .set((
                        crate::schema::player_activities::dsl::rank.eq(diesel::upsert::excluded(
                            crate::schema::player_activities::dsl::rank,
                        )),
                        crate::schema::player_activities::dsl::score.eq(diesel::upsert::excluded(
                            crate::schema::player_activities::dsl::score,
                        )),
                    ));
                    store_activities_query.execute(conn).await?;
                }

                diesel::dsl::insert_into(
                    crate::schema::player_overall_experience::dsl::player_overall_experience,
                )
                .values(experience_row)
                .execute(conn)
                .await?;

                diesel::dsl::insert_into(crate::schema::player_overall_pvm::dsl::player_overall_pvm)
                    .values(pvm_row)
                    .execute(conn)
                    .await?;

                Ok::<(), diesel::result::Error>(())
            })
        })
        .await?;

    Ok(())
}

// One failing player never aborts the batch, the caller gets every outcome
pub async fn run_batch(
    client: &crate::hiscores::Client,
    player_names: Vec<String>,
    workers: usize,
) -> Vec<(String, Result<(), IngestError>)> {
    futures::stream::iter(player_names)
        .map(|player_name| async move {
            let result = ingest_player(client, &player_name).await;
            (player_name, result)
        })
        .buffer_unordered(workers.max(1))
        .collect()
        .await
}
