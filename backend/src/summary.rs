use diesel::prelude::*;
use diesel_async::RunQueryDsl;

#[derive(Debug)]
pub enum SummaryError {
    Connection(diesel::ConnectionError),
    Persist(diesel::result::Error),
}

impl From<diesel::ConnectionError> for SummaryError {
    fn from(value: diesel::ConnectionError) -> Self {
        Self::Connection(value)
    }
}

impl From<diesel::result::Error> for SummaryError {
    fn from(value: diesel::result::Error) -> Self {
        Self::Persist(value)
    }
}

pub fn week_start(captured_at: chrono::NaiveDateTime) -> chrono::NaiveDate {
    captured_at.date().week(chrono::Weekday::Mon).first_day()
}

// Start/end are the first/last snapshot by timestamp within the week, so a
// one-row week yields gain 0 and an externally reset counter yields a
// negative gain instead of an invented spread.
pub fn summarize_experience(
    rows: &[crate::models::OverallExperience],
) -> Vec<crate::models::WeeklyExperienceSummary> {
    let mut groups = std::collections::HashMap::new();
    for row in rows {
        let key = (row.player_name.clone(), week_start(row.captured_at));

        let bounds = groups.entry(key).or_insert((row, row));
        if row.captured_at < bounds.0.captured_at {
            bounds.0 = row;
        }
        if row.captured_at > bounds.1.captured_at {
            bounds.1 = row;
        }
    }

    let mut summaries = groups
        .into_iter()
        .map(
            |((player_name, week_start), (first, last))| crate::models::WeeklyExperienceSummary {
                player_name,
                week_start,
                start_experience: first.overall_experience,
                end_experience: last.overall_experience,
                experience_gain: last.overall_experience - first.overall_experience,
            },
        )
        .collect::<Vec<_>>();
    summaries.sort_unstable_by(|a, b| {
        a.player_name
            .cmp(&b.player_name)
            .then_with(|| a.week_start.cmp(&b.week_start))
    });

    summaries
}

pub fn summarize_pvm(rows: &[crate::models::PvmSnapshot]) -> Vec<crate::models::WeeklyPvmSummary> {
    let mut groups = std::collections::HashMap::new();
    for row in rows {
        let key = (row.player_name.clone(), week_start(row.captured_at));

        let bounds = groups.entry(key).or_insert((row, row));
        if row.captured_at < bounds.0.captured_at {
            bounds.0 = row;
        }
        if row.captured_at > bounds.1.captured_at {
            bounds.1 = row;
        }
    }

    let mut summaries = groups
        .into_iter()
        .map(
            |((player_name, week_start), (first, last))| crate::models::WeeklyPvmSummary {
                player_name,
                week_start,
                raids_start: first.raids_total,
                raids_end: last.raids_total,
                raids_increase: last.raids_total - first.raids_total,
                bosses_start: first.bosses_total,
                bosses_end: last.bosses_total,
                bosses_increase: last.bosses_total - first.bosses_total,
            },
        )
        .collect::<Vec<_>>();
    summaries.sort_unstable_by(|a, b| {
        a.player_name
            .cmp(&b.player_name)
            .then_with(|| a.week_start.cmp(&b.week_start))
    });

    summaries
}

#[tracing::instrument]
pub async fn update_weekly_summaries() -> Result<(), SummaryError> {
    let mut db_con = crate::db_connection().await?;

    db_con
        .build_transaction()
        .repeatable_read()
        .run(|conn| {
            Box::pin(async move {
                let experience_rows: Vec<crate::models::OverallExperience> =
                    crate::schema::player_overall_experience::dsl::player_overall_experience
                        .select(crate::models::OverallExperience::as_select())
                        .load(conn)
                        .await?;

                let pvm_rows: Vec<crate::models::PvmSnapshot> =
                    crate::schema::player_overall_pvm::dsl::player_overall_pvm
                        .select(crate::models::PvmSnapshot::as_select())
                        .load(conn)
                        .await?;

                let experience_summaries = summarize_experience(&experience_rows);
                let pvm_summaries = summarize_pvm(&pvm_rows);

                tracing::info!(
                    "Upserting {} experience and {} pvm week summaries",
                    experience_summaries.len(),
                    pvm_summaries.len()
                );

                if !experience_summaries.is_empty() {
                    let store_experience_query = diesel::dsl::insert_into(
                        crate::schema::weekly_experience_summary::dsl::weekly_experience_summary,
                    )
                    .values(experience_summaries)
                    .on_conflict((
                        crate::schema::weekly_experience_summary::dsl::player_name,
                        crate::schema::weekly_experience_summary::dsl::week_start,
                    ))
                    .do_update()
                    .set((
                        crate::schema::weekly_experience_summary::dsl::start_experience.eq(
                            diesel::upsert::excluded(
                                crate::schema::weekly_experience_summary::dsl::start_experience,
                            ),
                        ),
                        crate::schema::weekly_experience_summary::dsl::end_experience.eq(
                            diesel::upsert::excluded(
                                crate::schema::weekly_experience_summary::dsl::end_experience,
                            ),
                        ),
                        crate::schema::weekly_experience_summary::dsl::experience_gain.eq(
                            diesel::upsert::excluded(
                                crate::schema::weekly_experience_summary::dsl::experience_gain,
                            ),
                        ),
                    ));
                    store_experience_query.execute(conn).await?;
                }

                if !pvm_summaries.is_empty() {
                    let store_pvm_query = diesel::dsl::insert_into(
                        crate::schema::weekly_pvm_summary::dsl::weekly_pvm_summary,
                    )
                    .values(pvm_summaries)
                    .on_conflict((
                        crate::schema::weekly_pvm_summary::dsl::player_name,
                        crate::schema::weekly_pvm_summary::dsl::week_start,
                    ))
                    .do_update()
                    .set((
                        crate::schema::weekly_pvm_summary::dsl::raids_start.eq(
                            diesel::upsert::excluded(
                                crate::schema::weekly_pvm_summary::dsl::raids_start,
                            ),
                        ),
                        crate::schema::weekly_pvm_summary::dsl::raids_end.eq(
                            diesel::upsert::excluded(
                                crate::schema::weekly_pvm_summary::dsl::raids_end,
                            ),
                        ),
                        crate::schema::weekly_pvm_summary::dsl::raids_increase.eq(
                            diesel::upsert::excluded(
                                crate::schema::weekly_pvm_summary::dsl::raids_increase,
                            ),
                        ),
                        crate::schema::weekly_pvm_summary::dsl::bosses_start.eq(
                            diesel::upsert::excluded(
                                crate::schema::weekly_pvm_summary::dsl::bosses_start,
                            ),
                        ),
                        crate::schema::weekly_pvm_summary::dsl::bosses_end.eq(
                            diesel::upsert::excluded(
                                crate::schema::weekly_pvm_summary::dsl::bosses_end,
                            ),
                        ),
                        crate::schema::weekly_pvm_summary::dsl::bosses_increase.eq(
                            diesel::upsert::excluded(
                                crate::schema::weekly_pvm_summary::dsl::bosses_increase,
                            ),
                        ),
                    ));
                    store_pvm_query.execute(conn).await?;
                }

                Ok::<(), diesel::result::Error>(())
            })
        })
        .await?;

    Ok(())
}
