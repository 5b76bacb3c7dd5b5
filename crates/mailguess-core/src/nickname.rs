//! Formal names and their informal variants.
//!
//! The table is a closed, ordered list. Some nicknames are registered under
//! more than one formal name (`sam` under both `samuel` and `samantha`,
//! `alex` under `alexander` and `alexandra`); lookups resolve to whichever
//! entry is declared first. That is the intended behaviour, and the entry
//! order below is part of the contract.

/// `(formal name, variants)` pairs, all lowercase, in lookup order.
pub const NICKNAMES: &[(&str, &[&str])] = &[
  ("michael", &["mike", "mikey"]),
  ("robert", &["rob", "bob", "bobby", "bert"]),
  ("william", &["bill", "will", "liam", "billy"]),
  ("elizabeth", &["liz", "beth", "eliza", "libby", "betsy", "bessie"]),
  ("richard", &["rich", "dick", "rick", "richie"]),
  ("thomas", &["tom", "tommy"]),
  ("jonathan", &["jon", "john"]),
  ("matthew", &["matt", "matty"]),
  ("nicholas", &["nick", "nicky"]),
  ("james", &["jim", "jimmy", "jamie"]),
  ("christopher", &["chris", "topher", "kit", "christ"]),
  ("alexander", &["alex", "xander", "al", "lex"]),
  ("andrew", &["andy", "drew"]),
  ("arthur", &["art", "artie"]),
  ("benjamin", &["ben", "benny", "benji"]),
  ("charles", &["charlie", "chuck", "chas"]),
  ("daniel", &["dan", "danny"]),
  ("david", &["dave", "davy"]),
  ("edward", &["ed", "eddie", "ned", "ted"]),
  ("frederick", &["fred", "freddie", "ricky"]),
  ("henry", &["hank", "harry", "hal"]),
  ("joseph", &["joe", "joey"]),
  ("lawrence", &["larry", "laurie"]),
  ("patrick", &["pat", "paddy", "rick", "ricky"]),
  ("samuel", &["sam", "sammy"]),
  ("theodore", &["theo", "ted", "teddy"]),
  ("alexandra", &["alex", "alexa", "lexi", "sasha"]),
  ("catherine", &["cat", "cathy", "kate", "katie", "kit", "trina"]),
  ("eleanor", &["ellie", "nell", "nora"]),
  ("isabella", &["izzy", "bella", "belle"]),
  ("margaret", &["maggie", "marge", "peggy", "daisy", "rita", "margo"]),
  ("samantha", &["sam", "sammy"]),
  ("sarah", &["sally", "sadie"]),
  ("victoria", &["vicky", "tori", "vic"]),
  ("virginia", &["ginny", "ginger"]),
];

/// The outcome of looking a name up in [`NICKNAMES`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Resolution {
  /// The formal name the input belongs to, if any.
  pub formal: Option<&'static str>,
  /// The variants registered under `formal`, in table order. Empty when
  /// nothing matched.
  pub class:  &'static [&'static str],
}

/// Look up `name_lower`, which must already be lowercase.
///
/// A formal-name key matches itself. Otherwise the first entry listing the
/// name as a variant wins. Only exact matches count.
pub fn resolve(name_lower: &str) -> Resolution {
  let by_key = NICKNAMES.iter().find(|(formal, _)| *formal == name_lower);
  let by_variant = || {
    NICKNAMES
      .iter()
      .find(|(_, variants)| variants.iter().any(|v| *v == name_lower))
  };

  match by_key.or_else(by_variant) {
    Some(&(formal, class)) => Resolution {
      formal: Some(formal),
      class,
    },
    None => Resolution::default(),
  }
}
