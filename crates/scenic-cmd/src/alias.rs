//! Short-spelling command aliases
//!
//! Applied only to the first token of a line. Unknown spellings pass
//! through unchanged.

/// Expand a command alias to its canonical name
pub fn resolve(token: &str) -> &str {
    match token {
        "c" => "cube",
        "s" => "sphere",
        "p" => "plane",
        "cy" => "cylinder",
        "co" => "cone",
        "t" => "torus",
        "te" => "tetrahedron",
        "oc" => "octahedron",
        "ic" => "icosahedron",
        "do" => "dodecahedron",
        "r" => "ring",
        "cp" => "capsule",
        "mv" => "move",
        "rt" => "rotate",
        "sc" => "scale",
        "cl" => "color",
        "mt" => "material",
        "tx" => "texture",
        "d" => "delete",
        "h" => "hide",
        "sh" => "show",
        "ls" => "list",
        "gr" => "group",
        "ug" => "ungroup",
        "al" => "ambientLight",
        "dl" => "directionalLight",
        "pl" => "pointLight",
        "sl" => "spotLight",
        "hl" => "hemisphereLight",
        "an" => "animate",
        "cm" => "camera",
        "lk" => "lookAt",
        "cn" => "center",
        "bb" => "boundingBox",
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::resolve;

    #[test]
    fn expands_known_aliases() {
        assert_eq!(resolve("c"), "cube");
        assert_eq!(resolve("pl"), "pointLight");
        assert_eq!(resolve("bb"), "boundingBox");
    }

    #[test]
    fn passes_unknown_spellings_through() {
        assert_eq!(resolve("cube"), "cube");
        assert_eq!(resolve("frobnicate"), "frobnicate");
    }
}
