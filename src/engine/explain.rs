/// One input to a decision and how much it counted.
#[derive(Debug, Clone, PartialEq)]
#[derive(serde::Serialize)]
pub struct Factor {
    pub name: String,
    pub value: f32,
    pub weight: f32,
}

/// Human-readable account of a decision.
///
/// Built from the same inputs the procedures read, after the fact. Nothing
/// here feeds back into the choice.
#[derive(Debug, Default, Clone, PartialEq)]
#[derive(serde::Serialize)]
pub struct Explanation {
    pub reasoning: String,
    pub factors: Vec<Factor>,
}

impl Explanation {
    pub fn new(reasoning: String) -> Self {
        Self {
            reasoning,
            factors: Vec::new(),
        }
    }
    pub fn factor(mut self, name: &str, value: f32, weight: f32) -> Self {
        self.factors.push(Factor {
            name: name.to_string(),
            value,
            weight,
        });
        self
    }
    pub fn get(&self, name: &str) -> Option<f32> {
        self.factors.iter().find(|f| f.name == name).map(|f| f.value)
    }
}

impl std::fmt::Display for Explanation {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        writeln!(f, "{}", self.reasoning)?;
        for factor in self.factors.iter() {
            writeln!(f, "  {:<14} {:>8.3}  x{:.2}", factor.name, factor.value, factor.weight)?;
        }
        Ok(())
    }
}
