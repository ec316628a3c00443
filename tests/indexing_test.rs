mod common;

use assert2::{check, let_assert};
use common::{ScriptedProvider, SearchWorkspace, dataset, workspace};
use rstest::rstest;
use schematic_search::{IndexStatus, TextType};

#[rstest]
fn bare_component_line_is_a_title(workspace: SearchWorkspace) {
    let index = workspace.index("wiring.pdf", &["组合仪表"]);

    let_assert!(Some(elements) = index.page_elements.get(&1));
    check!(elements.len() == 1);
    check!(elements[0].text_type == TextType::ComponentTitle);
    check!(elements[0].components[0].name == "组合仪表");
}

#[rstest]
fn labelled_component_line_keeps_its_component(workspace: SearchWorkspace) {
    let index = workspace.index("wiring.pdf", &["大灯开关状态：关闭"]);

    let element = &index.page_elements[&1][0];
    // a catalog component longer than two characters makes the line a title
    check!(element.text_type == TextType::ComponentTitle);
    let names: Vec<&str> = element.components.iter().map(|c| c.name.as_str()).collect();
    check!(names == ["大灯开关"]);
    check!(element.components[0].position == (0, 4));
}

#[rstest]
fn single_character_lines_are_not_indexed(workspace: SearchWorkspace) {
    let index = workspace.index("wiring.pdf", &["  灯  \n组合仪表\nA"]);

    let texts: Vec<&str> = index.page_elements[&1]
        .iter()
        .map(|e| e.text.as_str())
        .collect();
    check!(texts == ["组合仪表"]);
}

#[rstest]
fn failed_pages_are_skipped_but_document_succeeds(workspace: SearchWorkspace) {
    let provider = ScriptedProvider::pages(&["组合仪表", "大灯开关\n雨刮电机", "点烟器"])
        .failing_on(&[2]);
    let_assert!(Some(index) = workspace.engine.index(&provider, "wiring.pdf"));

    check!(index.status == IndexStatus::Success);
    check!(index.error.is_none());
    check!(index.total_pages == 3);
    check!(index.success_pages == 2);
    check!(!index.page_elements.contains_key(&2));
    check!(!index.page_components_count.contains_key(&2));
    check!(index.total_components == 2);
    check!(workspace.store().load("wiring.pdf") == Some(index));
}

#[rstest]
fn missing_document_fails_without_snapshot(workspace: SearchWorkspace) {
    let_assert!(Some(index) = workspace.engine.index(&ScriptedProvider::missing(), "gone.pdf"));

    check!(index.status == IndexStatus::Failed);
    let_assert!(Some(error) = &index.error);
    check!(error.contains("gone.pdf"));
    check!(workspace.store().load("gone.pdf").is_none());
}

#[rstest]
fn unreadable_page_count_fails_the_document(workspace: SearchWorkspace) {
    let mut provider = ScriptedProvider::pages(&["组合仪表"]);
    if let Some(source) = &mut provider.source {
        source.broken_page_count = true;
    }
    let_assert!(Some(index) = workspace.engine.index(&provider, "locked.pdf"));

    check!(index.status == IndexStatus::Failed);
    check!(index.success_pages == 0);
    check!(workspace.store().indexed_documents().is_empty());
}

#[rstest]
fn persisted_snapshot_round_trips(workspace: SearchWorkspace) {
    let index = workspace.index(
        "wiring.pdf",
        &["整车电路图\n大灯开关 → 组合仪表", "ACC继电器：常开\n12V 供电"],
    );

    check!(index.status == IndexStatus::Success);
    check!(workspace.store().load("wiring.pdf") == Some(index.clone()));
    check!(workspace.store().load("wiring") == Some(index));
}

#[rstest]
fn reindexing_is_idempotent(workspace: SearchWorkspace) {
    let pages = ["组合仪表\n大灯开关", "雨刮电机 雨刮开关\n见下页"];
    let first = workspace.index("wiring.pdf", &pages);
    let second = workspace.index("wiring.pdf", &pages);

    check!(first.total_pages == second.total_pages);
    check!(first.total_components == second.total_components);
    check!(first.page_components_count == second.page_components_count);
    check!(first == second);
}

#[rstest]
fn reindexing_replaces_previous_snapshot(workspace: SearchWorkspace) {
    workspace.index("wiring.pdf", &["组合仪表", "大灯开关"]);
    let second = workspace.index("wiring.pdf", &["点烟器"]);

    let_assert!(Some(loaded) = workspace.store().load("wiring.pdf"));
    check!(loaded == second);
    check!(loaded.total_pages == 1);
}

#[rstest]
fn total_components_matches_page_counts(workspace: SearchWorkspace) {
    let index = workspace.index(
        "wiring.pdf",
        &["组合仪表 大灯开关\n大灯开关", "", "ABS控制器 → ECAS控制器"],
    );

    check!(index.total_components == index.page_components_count.values().sum::<usize>());
    check!(index.page_components_count.get(&1) == Some(&3));
    check!(index.page_components_count.get(&2) == Some(&0));
    check!(index.success_pages <= index.total_pages);
}

#[rstest]
fn page_text_artifacts_are_written(workspace: SearchWorkspace) {
    workspace.index("wiring.pdf", &["组合仪表", "点烟器"]);

    let path = workspace.store().page_text_path("wiring.pdf", 2);
    let text = std::fs::read_to_string(path).unwrap();
    check!(text.starts_with("=== 第2页 ===\n点烟器"));
}

#[rstest]
fn page_dumps_feed_the_indexer(workspace: SearchWorkspace) {
    let provider = workspace.write_dump("dump", &["组合仪表", "雨刮电机"]);
    let_assert!(Some(index) = workspace.engine.index(&provider, "dump.pdf"));

    check!(index.status == IndexStatus::Success);
    check!(index.total_components == 2);
}

#[rstest]
fn specialized_documents_are_never_indexed(workspace: SearchWorkspace) {
    let workspace = workspace.with_specialized("xdy3.pdf", dataset([(1, vec!["大灯开关"])]));

    check!(workspace.engine.index(&ScriptedProvider::pages(&["组合仪表"]), "xdy3.pdf").is_none());
    check!(workspace.store().indexed_documents().is_empty());
}
