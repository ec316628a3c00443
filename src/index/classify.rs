//! Structural role classification for single lines of diagram text.

use crate::catalog::ComponentCatalog;
use crate::types::TextType;
use regex::{RegexSet, RegexSetBuilder};
use std::sync::{Arc, LazyLock};

/// Catalog names at or below this many characters are too generic ("开关", "保险")
/// to mark a line as a title on their own.
const MIN_TITLE_COMPONENT_CHARS: usize = 2;

/// Separators that turn a component mention into a labelled description.
const DESCRIPTION_MARKERS: &[char] = &[':', '：', '→', '='];

/// Section headers: subsystem diagrams, page reference codes, system/module suffixes.
static TITLE_PATTERNS: LazyLock<RegexSet> = LazyLock::new(|| {
    case_insensitive_set(&[
        r"(?:电气|电路|系统).*(?:原理|图)",
        r"^[A-Za-z0-9_\-]+\s*\d+-\d+$",
        r"^(?:电气|电路|控制|电源|信号|执行|传感).*(?:系统|模块|单元|装置)$",
    ])
});

/// Labelled or annotated content: key/value pairs, pin arrows, qualified
/// components, unit-suffixed parameters, wiring vocabulary.
static DESCRIPTION_PATTERNS: LazyLock<RegexSet> = LazyLock::new(|| {
    case_insensitive_set(&[
        r"(?:控制|连接|输入|输出|参数|说明|功能|状态|信号).*[:：→]",
        r"^[A-Za-z0-9]+\s*→\s*[A-Za-z0-9]+",
        r"^(?:左|右|前|后|上|下|主|副|司机|乘客).*(?:开关|电机|传感器|继电器|指示灯)$",
        r"^\d[\dA-Za-z.]*\s*(?:V|A|Ω|W|Hz)",
        r"^(?:短接|接地|供电|接线|插接|端子|pin)",
    ])
});

fn case_insensitive_set(patterns: &[&str]) -> RegexSet {
    RegexSetBuilder::new(patterns)
        .case_insensitive(true)
        .build()
        .expect("classifier patterns are valid")
}

/// Assigns a [`TextType`] to a line.
///
/// Tiers are evaluated in order and the first one that fires wins:
/// title patterns, title-by-catalog, description patterns,
/// description-by-catalog, then normal text.
#[derive(Debug, Clone)]
pub struct TextClassifier {
    catalog: Arc<ComponentCatalog>,
}

impl TextClassifier {
    pub fn new(catalog: Arc<ComponentCatalog>) -> Self {
        Self { catalog }
    }

    pub fn classify(&self, line: &str) -> TextType {
        let line = line.trim();
        if line.is_empty() {
            return TextType::NormalText;
        }

        if TITLE_PATTERNS.is_match(line) || self.has_title_component(line) {
            return TextType::ComponentTitle;
        }

        if DESCRIPTION_PATTERNS.is_match(line) || self.is_labelled_component(line) {
            return TextType::ComponentDesc;
        }

        TextType::NormalText
    }

    fn has_title_component(&self, line: &str) -> bool {
        self.catalog
            .entries()
            .iter()
            .any(|entry| entry.char_len() > MIN_TITLE_COMPONENT_CHARS && entry.is_in(line))
    }

    fn is_labelled_component(&self, line: &str) -> bool {
        line.contains(DESCRIPTION_MARKERS)
            && self.catalog.entries().iter().any(|entry| entry.is_in(line))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert2::check;
    use rstest::{fixture, rstest};

    #[fixture]
    fn classifier() -> TextClassifier {
        TextClassifier::new(Arc::new(ComponentCatalog::builtin()))
    }

    #[rstest]
    #[case("整车电路图")]
    #[case("电源系统原理图")]
    #[case("3700001-94001")]
    #[case("EC 14-1")]
    #[case("控制单元")]
    #[case("电源管理模块")]
    fn title_patterns(classifier: TextClassifier, #[case] line: &str) {
        check!(classifier.classify(line) == TextType::ComponentTitle);
    }

    #[rstest]
    #[case("组合仪表")]
    #[case("大灯开关状态：关闭")]
    #[case("左前轮速传感器 A3→A2")]
    #[case("接 abs控制器 端")]
    fn catalog_component_makes_title(classifier: TextClassifier, #[case] line: &str) {
        check!(classifier.classify(line) == TextType::ComponentTitle);
    }

    #[rstest]
    #[case("输出信号：高电平")]
    #[case("A3→A2")]
    #[case("C11 → C12")]
    #[case("左侧灯具开关")]
    #[case("12V")]
    #[case("7.5A")]
    #[case("接地点G1")]
    #[case("PIN12 空")]
    fn description_patterns(classifier: TextClassifier, #[case] line: &str) {
        check!(classifier.classify(line) == TextType::ComponentDesc);
    }

    #[test]
    fn short_component_with_separator_is_description() {
        // "保险" is two characters: too short for a title, but labelled by the colon.
        let classifier = TextClassifier::new(Arc::new(ComponentCatalog::new(["保险"]).unwrap()));
        check!(classifier.classify("保险: F12") == TextType::ComponentDesc);
        check!(classifier.classify("保险 F12") == TextType::NormalText);
    }

    #[rstest]
    #[case("")]
    #[case("   ")]
    #[case("见下页")]
    #[case("备注 无")]
    fn normal_text(classifier: TextClassifier, #[case] line: &str) {
        check!(classifier.classify(line) == TextType::NormalText);
    }

    #[test]
    fn any_long_catalog_name_forces_title() {
        let catalog = Arc::new(ComponentCatalog::builtin());
        let classifier = TextClassifier::new(catalog.clone());
        for entry in catalog.entries().iter().filter(|e| e.char_len() > 2) {
            let line = format!("备注 {} = 1", entry.name());
            check!(classifier.classify(&line) == TextType::ComponentTitle, "{}", line);
        }
    }
}
