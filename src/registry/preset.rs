use colorgrad::Gradient;

/// Names resolvable in the `colorgrad.preset` namespace, in listing order.
/// Append `_r` to any of them for the reversed variant.
pub const NAMES: &[&str] = &[
    "blues",
    "br_bg",
    "bu_gn",
    "bu_pu",
    "cividis",
    "cool",
    "cubehelix_default",
    "gn_bu",
    "greens",
    "greys",
    "inferno",
    "magma",
    "or_rd",
    "oranges",
    "pi_yg",
    "plasma",
    "pr_gn",
    "pu_bu",
    "pu_bu_gn",
    "pu_or",
    "pu_rd",
    "purples",
    "rainbow",
    "rd_bu",
    "rd_gy",
    "rd_pu",
    "rd_yl_bu",
    "rd_yl_gn",
    "reds",
    "sinebow",
    "spectral",
    "turbo",
    "viridis",
    "warm",
    "yl_gn",
    "yl_gn_bu",
    "yl_or_br",
    "yl_or_rd",
];

pub(super) fn gradient(name: &str) -> Option<Box<dyn Gradient>> {
    use colorgrad::preset;
    Some(match name {
        "blues" => Box::new(preset::blues()),
        "br_bg" => Box::new(preset::br_bg()),
        "bu_gn" => Box::new(preset::bu_gn()),
        "bu_pu" => Box::new(preset::bu_pu()),
        "cividis" => Box::new(preset::cividis()),
        "cool" => Box::new(preset::cool()),
        "cubehelix_default" => Box::new(preset::cubehelix_default()),
        "gn_bu" => Box::new(preset::gn_bu()),
        "greens" => Box::new(preset::greens()),
        "greys" => Box::new(preset::greys()),
        "inferno" => Box::new(preset::inferno()),
        "magma" => Box::new(preset::magma()),
        "or_rd" => Box::new(preset::or_rd()),
        "oranges" => Box::new(preset::oranges()),
        "pi_yg" => Box::new(preset::pi_yg()),
        "plasma" => Box::new(preset::plasma()),
        "pr_gn" => Box::new(preset::pr_gn()),
        "pu_bu" => Box::new(preset::pu_bu()),
        "pu_bu_gn" => Box::new(preset::pu_bu_gn()),
        "pu_or" => Box::new(preset::pu_or()),
        "pu_rd" => Box::new(preset::pu_rd()),
        "purples" => Box::new(preset::purples()),
        "rainbow" => Box::new(preset::rainbow()),
        "rd_bu" => Box::new(preset::rd_bu()),
        "rd_gy" => Box::new(preset::rd_gy()),
        "rd_pu" => Box::new(preset::rd_pu()),
        "rd_yl_bu" => Box::new(preset::rd_yl_bu()),
        "rd_yl_gn" => Box::new(preset::rd_yl_gn()),
        "reds" => Box::new(preset::reds()),
        "sinebow" => Box::new(preset::sinebow()),
        "spectral" => Box::new(preset::spectral()),
        "turbo" => Box::new(preset::turbo()),
        "viridis" => Box::new(preset::viridis()),
        "warm" => Box::new(preset::warm()),
        "yl_gn" => Box::new(preset::yl_gn()),
        "yl_gn_bu" => Box::new(preset::yl_gn_bu()),
        "yl_or_br" => Box::new(preset::yl_or_br()),
        "yl_or_rd" => Box::new(preset::yl_or_rd()),
        _ => return None,
    })
}
