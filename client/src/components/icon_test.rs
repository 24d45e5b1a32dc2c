use super::*;

const ALL: [Glyph; 10] = [
    Glyph::Wheat,
    Glyph::Factory,
    Glyph::Flask,
    Glyph::Package,
    Glyph::Zap,
    Glyph::ArrowRight,
    Glyph::ChevronRight,
    Glyph::GitBranch,
    Glyph::BarChart,
    Glyph::TrendingUp,
];

#[test]
fn every_glyph_has_path_data() {
    for glyph in ALL {
        assert!(!glyph.paths().is_empty(), "{glyph:?}");
    }
}

#[test]
fn path_data_starts_with_a_move_command() {
    for glyph in ALL {
        for d in glyph.paths() {
            assert!(d.starts_with(['M', 'm']), "{glyph:?}: {d}");
        }
    }
}
