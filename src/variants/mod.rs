mod naive;

pub use naive::NaiveKMeans;
