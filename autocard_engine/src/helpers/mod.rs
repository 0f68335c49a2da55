mod card_extractor;

pub use card_extractor::extract_card_spec;
