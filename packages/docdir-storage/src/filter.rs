use sqlx::{Postgres, QueryBuilder};

use docdir_domain::{facet::Predicate, paging::SortRule};

/// Appends the predicate as a boolean SQL expression over the `providers` columns.
pub fn push_predicate(builder: &mut QueryBuilder<'_, Postgres>, predicate: &Predicate) {
	match predicate {
		Predicate::All => {
			builder.push("TRUE");
		},
		Predicate::And(nodes) => push_group(builder, nodes, " AND ", "TRUE"),
		Predicate::Or(nodes) => push_group(builder, nodes, " OR ", "FALSE"),
		Predicate::Contains { field, term } => {
			builder
				.push("strpos(lower(")
				.push(field.as_str())
				.push("), ")
				.push_bind(term.clone())
				.push(") > 0");
		},
		Predicate::AnyOf { field, values } => {
			let column = field.as_str();

			// Rows written before list columns were enforced may hold scalars.
			builder
				.push("EXISTS (SELECT 1 FROM jsonb_array_elements_text(CASE WHEN jsonb_typeof(")
				.push(column)
				.push(") = 'array' THEN ")
				.push(column)
				.push(" ELSE '[]'::jsonb END) AS item(value) WHERE lower(btrim(item.value)) = ANY(")
				.push_bind(values.clone())
				.push("))");
		},
		Predicate::Range { field, min, max } => {
			let column = field.as_str();

			builder.push("(").push(column).push(" >= ").push_bind(i64::from(*min));

			if let Some(max) = max {
				builder.push(" AND ").push(column).push(" <= ").push_bind(i64::from(*max));
			}

			builder.push(")");
		},
	}
}

/// Sorted listings break ties by insertion order so pages never overlap.
pub fn push_ordering(builder: &mut QueryBuilder<'_, Postgres>, ordering: Option<SortRule>) {
	builder.push(" ORDER BY ");

	if let Some(rule) = ordering {
		builder.push(rule.field.as_str()).push(" ").push(rule.direction.as_sql()).push(", ");
	}

	builder.push("seq ASC");
}

fn push_group(
	builder: &mut QueryBuilder<'_, Postgres>,
	nodes: &[Predicate],
	separator: &str,
	empty: &str,
) {
	if nodes.is_empty() {
		builder.push(empty);

		return;
	}

	builder.push("(");

	for (index, node) in nodes.iter().enumerate() {
		if index > 0 {
			builder.push(separator);
		}

		push_predicate(builder, node);
	}

	builder.push(")");
}
