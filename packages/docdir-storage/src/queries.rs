use sqlx::{Postgres, QueryBuilder};
use time::OffsetDateTime;
use uuid::Uuid;

use docdir_domain::{NewProvider, facet::Predicate, paging::SortRule, record::string_array};

use crate::{
	Error, Result,
	db::Db,
	filter::{push_ordering, push_predicate},
	models::ProviderRow,
};

const PROVIDER_COLUMNS: &str = "\
provider_id,
	name,
	specialization,
	qualifications,
	experience_years,
	location,
	charge_amount,
	photo_reference,
	spoken_languages,
	consult_modes,
	created_at";

pub async fn insert_provider(
	db: &Db,
	provider_id: Uuid,
	provider: &NewProvider,
	now: OffsetDateTime,
) -> Result<()> {
	sqlx::query(
		"\
INSERT INTO providers (
	provider_id,
	name,
	specialization,
	qualifications,
	experience_years,
	location,
	charge_amount,
	photo_reference,
	spoken_languages,
	consult_modes,
	created_at
)
VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)",
	)
	.bind(provider_id)
	.bind(&provider.name)
	.bind(&provider.specialization)
	.bind(string_array(&provider.qualifications))
	.bind(i64::from(provider.experience_years))
	.bind(&provider.location)
	.bind(i64::from(provider.charge_amount))
	.bind(&provider.photo_reference)
	.bind(string_array(&provider.spoken_languages))
	.bind(string_array(&provider.consult_modes))
	.bind(now)
	.execute(&db.pool)
	.await?;

	Ok(())
}

pub async fn select_providers(
	db: &Db,
	predicate: &Predicate,
	ordering: Option<SortRule>,
	offset: u64,
	limit: u32,
) -> Result<Vec<ProviderRow>> {
	let offset = i64::try_from(offset)
		.map_err(|_| Error::InvalidArgument(format!("Offset {offset} is out of range.")))?;
	let mut builder = QueryBuilder::<Postgres>::new("SELECT ");

	builder.push(PROVIDER_COLUMNS).push(" FROM providers WHERE ");
	push_predicate(&mut builder, predicate);
	push_ordering(&mut builder, ordering);
	builder.push(" LIMIT ").push_bind(i64::from(limit)).push(" OFFSET ").push_bind(offset);

	let rows = builder.build_query_as::<ProviderRow>().fetch_all(&db.pool).await?;

	Ok(rows)
}

pub async fn count_providers(db: &Db, predicate: &Predicate) -> Result<u64> {
	let mut builder = QueryBuilder::<Postgres>::new("SELECT count(*) FROM providers WHERE ");

	push_predicate(&mut builder, predicate);

	let count: i64 = builder.build_query_scalar().fetch_one(&db.pool).await?;

	u64::try_from(count).map_err(|_| Error::InvalidRow(format!("Negative row count {count}.")))
}
