//! Nickname-aware expansion of one name into a [`CandidateSet`].

use crate::{
  candidate::{CandidateSet, NameComponents},
  nickname,
  pattern::generate,
};

/// The first names a name is expanded under, in batch order: the literal
/// input, then the formal name when it differs from the input, then every
/// sibling variant other than the input.
///
/// The literal input keeps its original casing; every other entry comes from
/// the lowercase nickname table.
pub fn first_name_variants(first: &str) -> Vec<String> {
  let first_lower = first.to_lowercase();
  let resolution = nickname::resolve(&first_lower);

  let mut variants = vec![first.to_owned()];
  if let Some(formal) = resolution.formal
    && formal != first_lower
  {
    variants.push(formal.to_owned());
  }
  variants.extend(
    resolution
      .class
      .iter()
      .filter(|v| **v != first_lower)
      .map(|v| (*v).to_owned()),
  );
  variants
}

/// Generate candidates for `name` and every nickname-equivalent first name,
/// then deduplicate by address keeping the first occurrence.
///
/// Pure and infallible.
pub fn expand(name: &NameComponents) -> CandidateSet {
  first_name_variants(&name.first)
    .iter()
    .flat_map(|first| generate(first, &name.middle, &name.last, &name.domain))
    .collect()
}
