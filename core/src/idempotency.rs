// flexlease/src/idempotency.rs

use uuid::Uuid;

/// Key for the `Idempotency-Key` header. A non-blank namespace is prefixed to
/// make keys easier to trace in server logs.
pub fn generate_idempotency_key(namespace: Option<&str>) -> String {
  let key = Uuid::new_v4().to_string();
  match namespace.map(str::trim) {
    Some(ns) if !ns.is_empty() => format!("{}_{}", ns, key),
    _ => key,
  }
}
