use rprettytable::render::{html, text};
use rprettytable::{AppError, Cell, PrettyTable};

fn small() -> PrettyTable {
    let mut pt = PrettyTable::new();
    pt.create_from_rows(["a", "b"], [["1", "2"], ["33", "4"]])
        .unwrap();
    pt
}

#[test]
fn test_text_render_exact_grid() {
    let out = text::render(&small());
    assert_eq!(
        out,
        "+----+---+\n| a  | b | \n+----+---+\n| 1  | 2 | \n| 33 | 4 | \n+----+---+\n"
    );
}

#[test]
fn test_text_render_lines_have_same_width() {
    let out = text::render(&small());
    let widths: Vec<usize> = out
        .lines()
        .map(|l| l.trim_end().chars().count())
        .collect();
    assert_eq!(widths.len(), 6);
    assert!(widths.iter().all(|w| *w == widths[0]));
}

#[test]
fn test_text_render_no_blank_line_before_footer() {
    let out = text::render(&small());
    assert!(!out.contains("\n\n"));
    assert!(out.ends_with(" | \n+----+---+\n"));
}

#[test]
fn test_text_render_without_rows() {
    let mut pt = PrettyTable::new();
    pt.set_columns(["id", "name"]).unwrap();
    assert_eq!(
        text::render(&pt),
        "+----+------+\n| id | name | \n+----+------+\n+----+------+\n"
    );
}

#[test]
fn test_text_render_empty_model_is_empty_string() {
    let pt = PrettyTable::new();
    assert_eq!(text::render(&pt), "");
    assert_eq!(pt.to_string(), "");
}

#[test]
fn test_text_render_numbers_and_empty_cells() {
    let mut pt = PrettyTable::new();
    pt.set_columns(["item", "qty"]).unwrap();
    pt.add_row([Cell::from("apple"), Cell::from(12)]).unwrap();
    pt.add_row([Cell::from("fig"), Cell::from(None::<i32>)]).unwrap();
    assert_eq!(
        text::render(&pt),
        "+-------+-----+\n\
         | item  | qty | \n\
         +-------+-----+\n\
         | apple | 12  | \n\
         | fig   |     | \n\
         +-------+-----+\n"
    );
}

#[test]
fn test_text_render_keeps_widths_after_delete() {
    let mut pt = small();
    pt.delete_row(2).unwrap();
    assert_eq!(
        text::render(&pt),
        "+----+---+\n| a  | b | \n+----+---+\n| 1  | 2 | \n+----+---+\n"
    );
}

#[test]
fn test_display_matches_text_render() {
    let pt = small();
    assert_eq!(pt.to_string(), text::render(&pt));
}

#[test]
fn test_html_minimal() {
    let mut pt = PrettyTable::new();
    pt.create_from_rows(["x"], [["y"]]).unwrap();
    let out = html::render_plain(&pt).unwrap();

    assert!(out.starts_with("<table>"));
    assert!(out.ends_with("</table>"));
    assert_eq!(out.matches("<th>x</th>").count(), 1);
    assert_eq!(out.matches("<td>y</td>").count(), 1);
}

#[test]
fn test_html_full_structure() {
    let out = html::render_plain(&small()).unwrap();
    assert_eq!(
        out,
        "<table><thead><tr><th>a</th><th>b</th></tr></thead>\
         <tbody><tr><td>1</td><td>2</td></tr><tr><td>33</td><td>4</td></tr></tbody></table>"
    );
    assert!(!out.contains('\n'));
}

#[test]
fn test_html_attributes_in_given_order() {
    let out = html::render(
        &small(),
        [("id", "my-table"), ("class", "table table-striped"), ("border", "1")],
    )
    .unwrap();
    assert!(out.starts_with("<table id='my-table' class='table table-striped' border='1'><thead>"));
}

#[test]
fn test_html_values_are_not_escaped() {
    let mut pt = PrettyTable::new();
    pt.create_from_rows(["<b>"], [["a & b"]]).unwrap();
    let out = html::render_plain(&pt).unwrap();
    assert!(out.contains("<th><b></th>"));
    assert!(out.contains("<td>a & b</td>"));
}

#[test]
fn test_html_without_columns_is_invalid_state() {
    let pt = PrettyTable::new();
    assert!(matches!(
        html::render_plain(&pt),
        Err(AppError::InvalidState(_))
    ));
}

#[test]
fn test_html_empty_body() {
    let mut pt = PrettyTable::new();
    pt.set_columns(["x"]).unwrap();
    assert_eq!(
        html::render_plain(&pt).unwrap(),
        "<table><thead><tr><th>x</th></tr></thead><tbody></tbody></table>"
    );
}
