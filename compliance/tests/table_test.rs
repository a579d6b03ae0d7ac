use adminkit::{ColumnDef, SortDirection, TableModel};
use compliance::data;
use compliance::types::Partner;

fn partner_table() -> TableModel<Partner> {
    let mut table = TableModel::new(
        "Partners",
        vec![
            ColumnDef::new("name", "Name").sortable(),
            ColumnDef::new("country", "Country").sortable(),
            ColumnDef::new("complianceScore", "Compliance").sortable(),
            ColumnDef::new("website", "Website").sortable(),
        ],
    );
    table.set_rows(data::partners());
    table
}

#[test]
fn it_should_match_search_case_insensitively() {
    let mut table = partner_table();
    table.set_search("global fabrics");
    let visible = table.visible_rows();
    assert_eq!(visible.len(), 1);
    assert_eq!(visible[0].name, "Global Fabrics Ltd.");
    table.set_search("GLOBAL FABRICS");
    assert_eq!(table.visible_rows().len(), 1);
}

#[test]
fn it_should_search_every_field_not_just_visible_columns() {
    let mut table = partner_table();
    // contact email is not a column but still matches
    table.set_search("operations@dyeingfactory");
    let visible = table.visible_rows();
    assert_eq!(visible.len(), 1);
    assert_eq!(visible[0].name, "Dyeing Factory");
}

#[test]
fn it_should_sort_ascending_first_then_flip_on_a_repeat_click() {
    let mut table = partner_table();
    table.toggle_sort("complianceScore");
    assert_eq!(table.sort(), Some(("complianceScore", SortDirection::Asc)));
    let ascending: Vec<u8> = table
        .visible_rows()
        .into_iter()
        .map(|p| p.compliance_score)
        .collect();
    assert_eq!(ascending, vec![65, 78, 82]);

    table.toggle_sort("complianceScore");
    assert_eq!(table.sort(), Some(("complianceScore", SortDirection::Desc)));
    let descending: Vec<u8> = table
        .visible_rows()
        .into_iter()
        .map(|p| p.compliance_score)
        .collect();
    assert_eq!(descending, vec![82, 78, 65]);
}

#[test]
fn it_should_reset_to_ascending_when_switching_columns() {
    let mut table = partner_table();
    table.toggle_sort("complianceScore");
    table.toggle_sort("complianceScore");
    table.toggle_sort("name");
    assert_eq!(table.sort(), Some(("name", SortDirection::Asc)));
}

#[test]
fn it_should_keep_missing_values_last_in_both_directions() {
    let mut table = partner_table();
    // Dyeing Factory has no website
    table.toggle_sort("website");
    let ascending = table.visible_rows();
    assert_eq!(ascending.last().map(|p| p.name.clone()), Some("Dyeing Factory".to_string()));
    table.toggle_sort("website");
    let descending = table.visible_rows();
    assert_eq!(descending.last().map(|p| p.name.clone()), Some("Dyeing Factory".to_string()));
}

#[test]
fn it_should_ignore_sort_clicks_on_non_sortable_columns() {
    let mut table = TableModel::<Partner>::new(
        "Partners",
        vec![ColumnDef::new("status", "Status")],
    );
    table.set_rows(data::partners());
    table.toggle_sort("status");
    assert_eq!(table.sort(), None);
}

#[test]
fn it_should_report_the_empty_state_when_nothing_matches() {
    let mut table = partner_table();
    table.set_search("zzz-no-such-partner");
    assert!(table.is_empty_state());
    assert_eq!(table.empty_label(), "No results found");
    table.set_search("");
    assert!(!table.is_empty_state());
}

#[test]
fn it_should_render_cells_with_custom_renderers() {
    fn shout(value: &serde_json::Value) -> String {
        value.as_str().unwrap_or("").to_uppercase()
    }
    let mut table = TableModel::<Partner>::new(
        "Partners",
        vec![
            ColumnDef::new("name", "Name").render(shout),
            ColumnDef::new("complianceScore", "Compliance"),
            ColumnDef::new("website", "Website"),
        ],
    );
    table.set_rows(data::partners());
    let rows = table.visible_rows();
    let cells = table.cells(&rows[2]);
    assert_eq!(cells, vec!["DYEING FACTORY".to_string(), "78".to_string(), String::new()]);
}
