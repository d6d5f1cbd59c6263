pub mod archetypes;
pub mod classifier;
pub mod recommender;
pub mod similarity;

pub use classifier::{ArchetypeClassifier, LabelEncoder, SyntheticConfig, TrainError};
pub use recommender::{JobMatch, MatchMethod, MatchStrategy, Recommender};
pub use similarity::{cosine_similarity, euclidean_distance};
