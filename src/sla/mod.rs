//! The availability table and composite SLA calculations.

use std::collections::BTreeMap;
use std::sync::Arc;

use thiserror::Error;

pub(crate) mod http;

/// The number of decimal places composite SLA values are rounded to.
const PRECISION: i32 = 10;

/// The built-in availability table.
///
/// Every value is the documented monthly availability target of the service,
/// as a fraction in `(0, 1]`.
static BUILTIN: &[(&str, f64)] = &[
	("api-management", 0.9995),
	("app-service", 0.9995),
	("cdn", 0.999),
	("cosmos-db", 0.99999),
	("dns", 1.0),
	("front-door", 0.9999),
	("functions", 0.9995),
	("key-vault", 0.9995),
	("load-balancer", 0.9999),
	("redis-cache", 0.999),
	("service-bus", 0.999),
	("sql-database", 0.9999),
	("storage-account", 0.999),
	("virtual-machine", 0.9999),
];

/// The availability table.
///
/// Maps service names to the fraction of time each service is expected to be
/// operational. The table is built once at startup and never mutated
/// afterwards, so handles can be cloned freely and shared across requests
/// without synchronization.
#[derive(Debug, Clone)]
pub struct SlaTable {
	entries: Arc<BTreeMap<Box<str>, f64>>,
}

impl SlaTable {
	/// Returns the stored availability for `name`.
	///
	/// Lookups are exact and case-sensitive; there is no partial matching or
	/// normalization.
	pub fn get(&self, name: &str) -> Option<f64> {
		self.entries.get(name).copied()
	}

	/// Computes the combined availability of `services`, assuming they fail
	/// independently.
	///
	/// The accumulator starts at 1.0 and is multiplied by each service's
	/// availability in input order, so an empty list yields `1.0`. The first
	/// name without a table entry aborts the entire computation; there are no
	/// partial results.
	pub fn composite(&self, services: &[String]) -> Result<f64, UnknownService> {
		let mut composite = 1.0_f64;

		for service in services {
			composite *= self.get(service).ok_or_else(|| UnknownService {
				service: service.clone(),
			})?;
		}

		Ok(round(composite))
	}
}

impl Default for SlaTable {
	fn default() -> Self {
		BUILTIN.iter().copied().collect()
	}
}

impl<N> FromIterator<(N, f64)> for SlaTable
where
	N: Into<Box<str>>,
{
	fn from_iter<I>(iter: I) -> Self
	where
		I: IntoIterator<Item = (N, f64)>,
	{
		Self {
			entries: Arc::new(
				iter.into_iter()
					.map(|(name, sla)| (name.into(), sla))
					.collect(),
			),
		}
	}
}

impl serde::Serialize for SlaTable {
	fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
	where
		S: serde::Serializer,
	{
		self.entries.serialize(serializer)
	}
}

/// A requested service that has no table entry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown service: {service}")]
pub struct UnknownService {
	/// The name as it appeared in the request.
	pub service: String,
}

fn round(value: f64) -> f64 {
	let factor = 10.0_f64.powi(PRECISION);

	(value * factor).round() / factor
}

#[cfg(test)]
mod tests {
	use super::*;

	fn table() -> SlaTable {
		SlaTable::from_iter([("auth", 0.999), ("db", 0.9999)])
	}

	fn services(names: &[&str]) -> Vec<String> {
		names.iter().copied().map(String::from).collect()
	}

	#[test]
	fn get_returns_exact_stored_values() {
		assert_eq!(table().get("auth"), Some(0.999));
		assert_eq!(table().get("db"), Some(0.9999));
	}

	#[test]
	fn get_is_case_sensitive() {
		assert_eq!(table().get("AUTH"), None);
		assert_eq!(table().get("aut"), None);
	}

	#[test]
	fn composite_of_empty_list_is_one() {
		assert_eq!(table().composite(&[]), Ok(1.0));
	}

	#[test]
	fn composite_of_single_service_is_its_availability() {
		assert_eq!(table().composite(&services(&["auth"])), Ok(0.999));
	}

	#[test]
	fn composite_multiplies_availabilities() {
		assert_eq!(
			table().composite(&services(&["auth", "db"])),
			Ok(0.9989001),
		);
	}

	#[test]
	fn composite_is_commutative() {
		assert_eq!(
			table().composite(&services(&["auth", "db"])),
			table().composite(&services(&["db", "auth"])),
		);
	}

	#[test]
	fn composite_counts_repeated_names() {
		assert_eq!(table().composite(&services(&["auth", "auth"])), Ok(0.998001));
	}

	#[test]
	fn composite_aborts_on_first_unknown_service() {
		assert_eq!(
			table().composite(&services(&["auth", "nope", "also-missing"])),
			Err(UnknownService {
				service: String::from("nope"),
			}),
		);
	}

	#[test]
	fn unknown_service_error_names_the_service() {
		let error = table()
			.composite(&services(&["oops"]))
			.expect_err("'oops' is not in the table");

		assert_eq!(error.to_string(), "Unknown service: oops");
	}

	#[test]
	fn builtin_table_holds_valid_fractions() {
		let table = SlaTable::default();

		assert!(!table.entries.is_empty());

		for (name, sla) in table.entries.iter() {
			assert!(!name.is_empty());
			assert!(0.0 < *sla && *sla <= 1.0, "{name} has sla {sla}");
		}
	}
}
