/// Which advanced subsystems a difficulty tier switches on.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[derive(serde::Serialize, serde::Deserialize)]
pub struct Features {
    pub opponent_modeling: bool,
    pub icm: bool,
    pub tilt: bool,
    pub ranges: bool,
    pub board_texture: bool,
    pub gto: bool,
}

impl Features {
    /// Names of enabled features, for logs and explanations.
    pub fn enabled(&self) -> Vec<&'static str> {
        [
            (self.opponent_modeling, "opponents"),
            (self.icm, "icm"),
            (self.tilt, "tilt"),
            (self.ranges, "ranges"),
            (self.board_texture, "texture"),
            (self.gto, "gto"),
        ]
        .into_iter()
        .filter(|(on, _)| *on)
        .map(|(_, name)| name)
        .collect()
    }
}
