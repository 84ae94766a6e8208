// Word polarity lexicon, scores in [-1, 1]
use ahash::AHashMap;
use std::sync::OnceLock;

const POLARITY: &[(&str, f32)] = &[
    // positive
    ("amazing", 0.6),
    ("beautiful", 0.85),
    ("beloved", 0.7),
    ("best", 1.0),
    ("bright", 0.7),
    ("brilliant", 0.9),
    ("calm", 0.3),
    ("charming", 0.5),
    ("cheerful", 0.6),
    ("delightful", 0.8),
    ("excellent", 1.0),
    ("fair", 0.35),
    ("fine", 0.4),
    ("fortunate", 0.5),
    ("gentle", 0.4),
    ("glad", 0.5),
    ("glorious", 0.8),
    ("good", 0.7),
    ("gorgeous", 0.8),
    ("great", 0.8),
    ("happy", 0.8),
    ("hopeful", 0.5),
    ("joy", 0.8),
    ("joyful", 0.8),
    ("kind", 0.6),
    ("love", 0.5),
    ("lovely", 0.5),
    ("lucky", 0.5),
    ("marvelous", 0.8),
    ("nice", 0.6),
    ("noble", 0.6),
    ("peace", 0.5),
    ("peaceful", 0.5),
    ("perfect", 1.0),
    ("pleasant", 0.7),
    ("proud", 0.8),
    ("prosperity", 0.6),
    ("prosperous", 0.6),
    ("remarkable", 0.75),
    ("rich", 0.4),
    ("safe", 0.5),
    ("splendid", 0.8),
    ("strong", 0.4),
    ("success", 0.6),
    ("successful", 0.75),
    ("sweet", 0.35),
    ("warm", 0.6),
    ("wise", 0.7),
    ("wonderful", 1.0),
    // negative
    ("afraid", -0.6),
    ("angry", -0.5),
    ("awful", -1.0),
    ("bad", -0.7),
    ("bitter", -0.5),
    ("bleak", -0.6),
    ("broken", -0.4),
    ("cold", -0.6),
    ("cruel", -1.0),
    ("dark", -0.15),
    ("dead", -0.2),
    ("dreadful", -0.9),
    ("evil", -1.0),
    ("fear", -0.6),
    ("grim", -0.6),
    ("hate", -0.8),
    ("horrible", -1.0),
    ("hostile", -0.6),
    ("lonely", -0.5),
    ("lost", -0.3),
    ("miserable", -1.0),
    ("painful", -0.7),
    ("poor", -0.4),
    ("restless", -0.2),
    ("sad", -0.5),
    ("sick", -0.7),
    ("sorrow", -0.6),
    ("terrible", -1.0),
    ("tragic", -0.75),
    ("ugly", -0.7),
    ("unhappy", -0.6),
    ("war", -0.4),
    ("weak", -0.4),
    ("worse", -0.4),
    ("worst", -1.0),
    ("wretched", -1.0),
    ("wrong", -0.5),
];

const INTENSIFIERS: &[(&str, f32)] = &[
    ("absolutely", 1.5),
    ("deeply", 1.4),
    ("extremely", 1.5),
    ("highly", 1.3),
    ("incredibly", 1.5),
    ("quite", 1.1),
    ("really", 1.2),
    ("so", 1.2),
    ("too", 1.2),
    ("truly", 1.3),
    ("very", 1.3),
];

const NEGATIONS: &[&str] = &["never", "no", "nor", "not", "nothing", "nobody", "none"];

fn polarity_map() -> &'static AHashMap<&'static str, f32> {
    static MAP: OnceLock<AHashMap<&'static str, f32>> = OnceLock::new();
    MAP.get_or_init(|| POLARITY.iter().copied().collect())
}

pub fn polarity(word: &str) -> Option<f32> {
    polarity_map().get(word).copied()
}

pub fn intensity(word: &str) -> Option<f32> {
    INTENSIFIERS
        .iter()
        .find(|(w, _)| *w == word)
        .map(|(_, factor)| *factor)
}

pub fn is_negation(word: &str) -> bool {
    NEGATIONS.contains(&word) || word.ends_with("n't")
}
