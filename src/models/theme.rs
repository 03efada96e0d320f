use serde::Serialize;

/// Override de estilo aplicado a un selector del mapa.
/// Por ahora el tema solo cambia colores.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Styler {
    pub color: &'static str,
}

impl Styler {
    pub const fn color(color: &'static str) -> Self {
        Self { color }
    }
}

/// Regla del tema: selector (featureType + elementType) y sus overrides.
///
/// Serializa al formato `MapTypeStyle` de Google Maps; `featureType` se omite
/// cuando la regla aplica a todas las features.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeRule {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub feature_type: Option<&'static str>,
    pub element_type: &'static str,
    pub stylers: &'static [Styler],
}

impl ThemeRule {
    /// Regla sin featureType (aplica a todo el mapa)
    pub const fn element(element_type: &'static str, stylers: &'static [Styler]) -> Self {
        Self {
            feature_type: None,
            element_type,
            stylers,
        }
    }

    pub const fn feature(
        feature_type: &'static str,
        element_type: &'static str,
        stylers: &'static [Styler],
    ) -> Self {
        Self {
            feature_type: Some(feature_type),
            element_type,
            stylers,
        }
    }

    /// Selector `(featureType, elementType)` de la regla
    pub fn selector(&self) -> (Option<&'static str>, &'static str) {
        (self.feature_type, self.element_type)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DARK_GEOMETRY: &[Styler] = &[Styler::color("#242f3e")];
    const PARK_LABELS: &[Styler] = &[Styler::color("#6b9a76")];

    #[test]
    fn global_rule_omits_feature_type() {
        let rule = ThemeRule::element("geometry", DARK_GEOMETRY);
        let json = serde_json::to_value(rule).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "elementType": "geometry",
                "stylers": [{ "color": "#242f3e" }]
            })
        );
    }

    #[test]
    fn feature_rule_serializes_both_selectors() {
        let rule = ThemeRule::feature("poi.park", "labels.text.fill", PARK_LABELS);
        let json = serde_json::to_value(rule).unwrap();
        assert_eq!(json["featureType"], "poi.park");
        assert_eq!(json["elementType"], "labels.text.fill");
        assert_eq!(json["stylers"][0]["color"], "#6b9a76");
    }
}
