use crate::BIG_STACK_RATIO;
use crate::SHORT_STACK_RATIO;

/// Stack relative to the field average.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StackClass {
    Big,
    Medium,
    Short,
}

/// stack ratio bucketing
impl From<f32> for StackClass {
    fn from(ratio: f32) -> Self {
        match ratio {
            r if r > BIG_STACK_RATIO => Self::Big,
            r if r < SHORT_STACK_RATIO => Self::Short,
            _ => Self::Medium,
        }
    }
}

impl std::fmt::Display for StackClass {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Big => write!(f, "big"),
            Self::Medium => write!(f, "medium"),
            Self::Short => write!(f, "short"),
        }
    }
}
