//! Streaming edits of the SpreadsheetML parts a summary touches.
//!
//! Each function reads one part with `quick_xml`, rewrites the few elements it
//! cares about and passes every other event through unchanged.

use crate::shared::Result;
use crate::summary_generation::domain::{column_letter, CsvTable};
use anyhow::{bail, Context};
use quick_xml::events::{BytesEnd, BytesStart, BytesText, Event};
use quick_xml::{Reader, Writer};
use std::collections::HashMap;

/// Workbook elements that come after `<definedNames>` in schema order
const AFTER_DEFINED_NAMES: &[&[u8]] = &[
    b"calcPr",
    b"oleSize",
    b"customWorkbookViews",
    b"pivotCaches",
    b"smartTagPr",
    b"smartTagTypes",
    b"webPublishing",
    b"fileRecoveryPr",
    b"webPublishObjects",
    b"extLst",
];

/// A worksheet listed in the workbook and the package part holding it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SheetPart {
    pub name: String,
    pub part: String,
}

/// Raw-data range a pivot cache may read from
pub struct PivotSource<'a> {
    pub sheet: &'a str,
    /// Relative A1 range, e.g. `A1:F11`
    pub range: String,
    pub defined_name: &'a str,
}

/// Sheets of `xl/workbook.xml` in tab order, resolved through the workbook rels
pub fn workbook_sheets(workbook_xml: &str, rels_xml: &str) -> Result<Vec<SheetPart>> {
    let mut targets = HashMap::new();
    let mut reader = Reader::from_str(rels_xml);
    loop {
        match reader.read_event()? {
            Event::Eof => break,
            Event::Start(e) | Event::Empty(e) if is(&e, b"Relationship") => {
                if let (Some(id), Some(target)) = (attribute(&e, b"Id")?, attribute(&e, b"Target")?)
                {
                    targets.insert(id, resolve_target(&target));
                }
            }
            _ => {}
        }
    }

    let mut sheets = Vec::new();
    let mut reader = Reader::from_str(workbook_xml);
    loop {
        match reader.read_event()? {
            Event::Eof => break,
            Event::Start(e) | Event::Empty(e) if is(&e, b"sheet") => {
                let name = attribute(&e, b"name")?.context("Sheet entry without a name")?;
                let id = attribute(&e, b"id")?
                    .with_context(|| format!("Sheet '{}' has no relationship id", name))?;
                let part = targets
                    .get(&id)
                    .cloned()
                    .with_context(|| format!("Sheet '{}' points at unknown part '{}'", name, id))?;
                sheets.push(SheetPart { name, part });
            }
            _ => {}
        }
    }

    Ok(sheets)
}

/// Workbook rels targets are relative to `xl/` unless absolute
fn resolve_target(target: &str) -> String {
    match target.strip_prefix('/') {
        Some(absolute) => absolute.to_string(),
        None => format!("xl/{}", target),
    }
}

/// Replaces the cells of a worksheet with `table`, header first, from A1
///
/// Column widths, styles and page setup of the template sheet stay as they
/// are; merged cells are dropped along with the old rows.
pub fn replace_sheet_data(sheet_xml: &str, table: &CsvTable) -> Result<String> {
    let mut reader = Reader::from_str(sheet_xml);
    let mut writer = Writer::new(Vec::new());
    let mut skipping: Option<&'static [u8]> = None;
    let mut replaced = false;

    loop {
        let event = reader.read_event()?;
        if let Some(name) = skipping {
            match &event {
                Event::End(e) if e.local_name().as_ref() == name => skipping = None,
                Event::Eof => break,
                _ => {}
            }
            continue;
        }

        match event {
            Event::Eof => break,
            Event::Start(e) if is(&e, b"sheetData") => {
                write_sheet_data(&mut writer, table)?;
                replaced = true;
                skipping = Some(b"sheetData".as_slice());
            }
            Event::Empty(e) if is(&e, b"sheetData") => {
                write_sheet_data(&mut writer, table)?;
                replaced = true;
            }
            Event::Start(e) if is(&e, b"mergeCells") => skipping = Some(b"mergeCells".as_slice()),
            Event::Empty(e) if is(&e, b"mergeCells") => {}
            Event::Empty(e) if is(&e, b"dimension") => {
                let updated = with_attribute(&e, "ref", &table.range())?;
                writer.write_event(Event::Empty(updated))?;
            }
            event => writer.write_event(event)?,
        }
    }

    if !replaced {
        bail!("Worksheet has no <sheetData> element");
    }
    into_string(writer)
}

enum Cell<'a> {
    Text(&'a str),
    Number(f64),
    Bool(bool),
}

/// Numbers and booleans are typed; blank cells are left out
fn typed_cell(value: &str) -> Option<Cell<'_>> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else if let Some(number) = parse_number(trimmed) {
        Some(Cell::Number(number))
    } else if trimmed.eq_ignore_ascii_case("true") {
        Some(Cell::Bool(true))
    } else if trimmed.eq_ignore_ascii_case("false") {
        Some(Cell::Bool(false))
    } else {
        Some(Cell::Text(value))
    }
}

/// Finite decimal numbers only; `inf`, `NaN` and the like stay text
pub fn parse_number(value: &str) -> Option<f64> {
    let looks_numeric = value
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, '.' | '-' | '+' | 'e' | 'E'));
    if !looks_numeric {
        return None;
    }
    value.parse::<f64>().ok().filter(|n| n.is_finite())
}

fn write_sheet_data<W: std::io::Write>(writer: &mut Writer<W>, table: &CsvTable) -> Result<()> {
    writer.write_event(Event::Start(BytesStart::new("sheetData")))?;

    let header = table.headers.iter().map(|h| Some(Cell::Text(h.as_str())));
    write_row(writer, 1, header)?;
    for (index, row) in table.rows.iter().enumerate() {
        write_row(writer, index + 2, row.iter().map(|v| typed_cell(v.as_str())))?;
    }

    writer.write_event(Event::End(BytesEnd::new("sheetData")))?;
    Ok(())
}

fn write_row<'a, W: std::io::Write>(
    writer: &mut Writer<W>,
    row_number: usize,
    cells: impl Iterator<Item = Option<Cell<'a>>>,
) -> Result<()> {
    let row_ref = row_number.to_string();
    writer.write_event(Event::Start(
        BytesStart::new("row").with_attributes([("r", row_ref.as_str())]),
    ))?;

    for (col, cell) in cells.enumerate() {
        let Some(cell) = cell else { continue };
        let cell_ref = format!("{}{}", column_letter(col), row_number);
        let start = BytesStart::new("c").with_attributes([("r", cell_ref.as_str())]);

        match cell {
            Cell::Number(number) => {
                writer.write_event(Event::Start(start))?;
                write_value(writer, &format!("{:?}", number))?;
            }
            Cell::Bool(flag) => {
                writer.write_event(Event::Start(start.with_attributes([("t", "b")])))?;
                write_value(writer, if flag { "1" } else { "0" })?;
            }
            Cell::Text(text) => {
                writer.write_event(Event::Start(start.with_attributes([("t", "inlineStr")])))?;
                writer.write_event(Event::Start(BytesStart::new("is")))?;
                let text = xml_safe(text);
                let t = if text.trim() == text {
                    BytesStart::new("t")
                } else {
                    BytesStart::new("t").with_attributes([("xml:space", "preserve")])
                };
                writer.write_event(Event::Start(t))?;
                writer.write_event(Event::Text(BytesText::new(&text)))?;
                writer.write_event(Event::End(BytesEnd::new("t")))?;
                writer.write_event(Event::End(BytesEnd::new("is")))?;
            }
        }
        writer.write_event(Event::End(BytesEnd::new("c")))?;
    }

    writer.write_event(Event::End(BytesEnd::new("row")))?;
    Ok(())
}

fn write_value<W: std::io::Write>(writer: &mut Writer<W>, value: &str) -> Result<()> {
    writer.write_event(Event::Start(BytesStart::new("v")))?;
    writer.write_event(Event::Text(BytesText::new(value)))?;
    writer.write_event(Event::End(BytesEnd::new("v")))?;
    Ok(())
}

/// Drops control characters XML 1.0 cannot carry
fn xml_safe(text: &str) -> String {
    text.chars()
        .filter(|c| !c.is_control() || matches!(c, '\t' | '\n' | '\r'))
        .collect()
}

enum Retarget {
    Range(String),
    RefreshOnly,
}

/// Points a pivot cache at the new rows of the raw sheet it reads from.
///
/// A cache whose `<worksheetSource>` names one of `sources` by sheet gets the
/// new `ref`; one that reads a defined name keeps it, since the name itself is
/// updated. Either way the cache is flagged `refreshOnLoad` so Excel rebuilds
/// it from the new rows. Returns `None` for caches over other data.
pub fn retarget_pivot_cache(xml: &str, sources: &[PivotSource<'_>]) -> Result<Option<String>> {
    let Some(retarget) = find_retarget(xml, sources)? else {
        return Ok(None);
    };

    let mut reader = Reader::from_str(xml);
    let mut writer = Writer::new(Vec::new());
    loop {
        match reader.read_event()? {
            Event::Eof => break,
            Event::Start(e) if is(&e, b"pivotCacheDefinition") => {
                writer.write_event(Event::Start(with_attribute(&e, "refreshOnLoad", "1")?))?;
            }
            Event::Empty(e) if is(&e, b"worksheetSource") => {
                writer.write_event(Event::Empty(retargeted_source(&e, &retarget)?))?;
            }
            Event::Start(e) if is(&e, b"worksheetSource") => {
                writer.write_event(Event::Start(retargeted_source(&e, &retarget)?))?;
            }
            event => writer.write_event(event)?,
        }
    }

    into_string(writer).map(Some)
}

fn find_retarget(xml: &str, sources: &[PivotSource<'_>]) -> Result<Option<Retarget>> {
    let mut reader = Reader::from_str(xml);
    loop {
        match reader.read_event()? {
            Event::Eof => return Ok(None),
            Event::Start(e) | Event::Empty(e) if is(&e, b"worksheetSource") => {
                if let Some(name) = attribute(&e, b"name")? {
                    let known = sources.iter().any(|s| s.defined_name == name);
                    return Ok(known.then_some(Retarget::RefreshOnly));
                }
                let sheet = attribute(&e, b"sheet")?;
                let source = sources.iter().find(|s| sheet.as_deref() == Some(s.sheet));
                return Ok(source.map(|s| Retarget::Range(s.range.clone())));
            }
            _ => {}
        }
    }
}

fn retargeted_source(e: &BytesStart<'_>, retarget: &Retarget) -> Result<BytesStart<'static>> {
    match retarget {
        Retarget::Range(range) => with_attribute(e, "ref", range),
        Retarget::RefreshOnly => Ok(e.clone().into_owned()),
    }
}

/// Sets workbook-level defined names and asks Excel to recalculate on open
///
/// Existing names with the same name are overwritten in place; the rest are
/// added to `<definedNames>`, which is created if the template has none.
pub fn update_workbook(workbook_xml: &str, names: &[(&str, String)]) -> Result<String> {
    let mut reader = Reader::from_str(workbook_xml);
    let mut writer = Writer::new(Vec::new());
    let mut pending: Vec<&(&str, String)> = names.iter().collect();
    let mut seen_defined_names = false;
    let mut skipping_name = false;

    loop {
        let event = reader.read_event()?;
        if skipping_name {
            if let Event::End(e) = &event {
                if e.local_name().as_ref() == b"definedName" {
                    skipping_name = false;
                }
            }
            if !matches!(event, Event::Eof) {
                continue;
            }
        }

        if !seen_defined_names && !pending.is_empty() && follows_defined_names(&event) {
            seen_defined_names = true;
            writer.write_event(Event::Start(BytesStart::new("definedNames")))?;
            write_defined_names(&mut writer, &mut pending)?;
            writer.write_event(Event::End(BytesEnd::new("definedNames")))?;
        }

        match event {
            Event::Eof => break,
            Event::Start(e) if is(&e, b"definedNames") => {
                seen_defined_names = true;
                writer.write_event(Event::Start(e))?;
            }
            Event::Empty(e) if is(&e, b"definedNames") => {
                seen_defined_names = true;
                writer.write_event(Event::Start(BytesStart::new("definedNames")))?;
                write_defined_names(&mut writer, &mut pending)?;
                writer.write_event(Event::End(BytesEnd::new("definedNames")))?;
            }
            Event::End(e) if e.local_name().as_ref() == b"definedNames" => {
                write_defined_names(&mut writer, &mut pending)?;
                writer.write_event(Event::End(e))?;
            }
            Event::Start(e) if is(&e, b"definedName") => {
                let name = attribute(&e, b"name")?;
                let workbook_scoped = attribute(&e, b"localSheetId")?.is_none();
                let position = pending
                    .iter()
                    .position(|(n, _)| workbook_scoped && name.as_deref() == Some(*n));
                match position {
                    Some(index) => {
                        let (_, reference) = pending.remove(index);
                        writer.write_event(Event::Start(e))?;
                        writer.write_event(Event::Text(BytesText::new(reference)))?;
                        writer.write_event(Event::End(BytesEnd::new("definedName")))?;
                        skipping_name = true;
                    }
                    None => writer.write_event(Event::Start(e))?,
                }
            }
            Event::Start(e) if is(&e, b"calcPr") => {
                writer.write_event(Event::Start(with_attribute(&e, "fullCalcOnLoad", "1")?))?;
            }
            Event::Empty(e) if is(&e, b"calcPr") => {
                writer.write_event(Event::Empty(with_attribute(&e, "fullCalcOnLoad", "1")?))?;
            }
            event => writer.write_event(event)?,
        }
    }

    into_string(writer)
}

/// True for the first workbook event a missing `<definedNames>` must precede
fn follows_defined_names(event: &Event<'_>) -> bool {
    match event {
        Event::Start(e) | Event::Empty(e) => AFTER_DEFINED_NAMES.contains(&e.local_name().as_ref()),
        Event::End(e) => e.local_name().as_ref() == b"workbook",
        _ => false,
    }
}

fn write_defined_names<W: std::io::Write>(
    writer: &mut Writer<W>,
    pending: &mut Vec<&(&str, String)>,
) -> Result<()> {
    for (name, reference) in pending.drain(..) {
        let start = BytesStart::new("definedName").with_attributes([("name", *name)]);
        writer.write_event(Event::Start(start))?;
        writer.write_event(Event::Text(BytesText::new(reference)))?;
        writer.write_event(Event::End(BytesEnd::new("definedName")))?;
    }
    Ok(())
}

/// Removes empty elements such as `<Override>` or `<Relationship>` whose
/// `attr` matches `predicate`
pub fn remove_elements(
    xml: &str,
    element: &[u8],
    attr: &[u8],
    predicate: impl Fn(&str) -> bool,
) -> Result<String> {
    let mut reader = Reader::from_str(xml);
    let mut writer = Writer::new(Vec::new());
    loop {
        match reader.read_event()? {
            Event::Eof => break,
            Event::Empty(e) if is(&e, element) => {
                if !attribute(&e, attr)?.is_some_and(|v| predicate(&v)) {
                    writer.write_event(Event::Empty(e))?;
                }
            }
            event => writer.write_event(event)?,
        }
    }
    into_string(writer)
}

fn is(e: &BytesStart<'_>, local_name: &[u8]) -> bool {
    e.local_name().as_ref() == local_name
}

/// Unescaped value of the attribute with the given local name
fn attribute(e: &BytesStart<'_>, local_name: &[u8]) -> Result<Option<String>> {
    for attr in e.attributes() {
        let attr = attr?;
        if attr.key.local_name().as_ref() == local_name {
            let decoder = Reader::from_str("").decoder();
            return Ok(Some(attr.decode_and_unescape_value(decoder)?.into_owned()));
        }
    }
    Ok(None)
}

/// Copy of `e` with `key` set to `value`, replacing any existing value
fn with_attribute(e: &BytesStart<'_>, key: &str, value: &str) -> Result<BytesStart<'static>> {
    let name = String::from_utf8(e.name().as_ref().to_vec())?;
    let mut updated = BytesStart::new(name);
    let mut replaced = false;

    for attr in e.attributes() {
        let attr = attr?;
        if attr.key.as_ref() == key.as_bytes() {
            updated.push_attribute((key, value));
            replaced = true;
        } else {
            updated.push_attribute(attr);
        }
    }
    if !replaced {
        updated.push_attribute((key, value));
    }
    Ok(updated)
}

fn into_string(writer: Writer<Vec<u8>>) -> Result<String> {
    String::from_utf8(writer.into_inner()).context("Rewritten XML is not UTF-8")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(headers: &[&str], rows: &[&[&str]]) -> CsvTable {
        CsvTable::new(
            headers.iter().map(|s| s.to_string()).collect(),
            rows.iter()
                .map(|r| r.iter().map(|s| s.to_string()).collect())
                .collect(),
        )
    }

    const SHEET: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<worksheet xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main"><dimension ref="A1:B9"/><cols><col min="1" max="1" width="20" customWidth="1"/></cols><sheetData><row r="1"><c r="A1" t="s"><v>0</v></c></row></sheetData><mergeCells count="1"><mergeCell ref="A1:B1"/></mergeCells><pageMargins left="0.7" right="0.7" top="0.75" bottom="0.75" header="0.3" footer="0.3"/></worksheet>"#;

    #[test]
    fn test_parse_number() {
        assert_eq!(parse_number("42"), Some(42.0));
        assert_eq!(parse_number("-1.5e-3"), Some(-0.0015));
        assert_eq!(parse_number("inf"), None);
        assert_eq!(parse_number("NaN"), None);
        assert_eq!(parse_number("bh-glx"), None);
        assert_eq!(parse_number("1-2"), None);
    }

    #[test]
    fn test_workbook_sheets_resolves_parts() {
        let workbook = r#"<workbook xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main" xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships"><sheets><sheet name="PRBS Summary" sheetId="1" r:id="rId2"/><sheet name="raw &amp; prbs" sheetId="2" r:id="rId1"/></sheets></workbook>"#;
        let rels = r#"<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships"><Relationship Id="rId1" Type="t" Target="worksheets/sheet2.xml"/><Relationship Id="rId2" Type="t" Target="/xl/worksheets/sheet1.xml"/></Relationships>"#;

        let sheets = workbook_sheets(workbook, rels).unwrap();
        assert_eq!(
            sheets,
            vec![
                SheetPart {
                    name: "PRBS Summary".to_string(),
                    part: "xl/worksheets/sheet1.xml".to_string()
                },
                SheetPart {
                    name: "raw & prbs".to_string(),
                    part: "xl/worksheets/sheet2.xml".to_string()
                },
            ]
        );
    }

    #[test]
    fn test_replace_sheet_data_types_cells_and_keeps_layout() {
        let data = table(
            &["host", "lane", "passed", "note"],
            &[&["bh-glx-b02u02", "0", "True", ""], &["a<b", "1e-12", "false", " x "]],
        );

        let xml = replace_sheet_data(SHEET, &data).unwrap();

        assert!(xml.contains(r#"<dimension ref="A1:D3"/>"#));
        assert!(xml.contains(r#"<col min="1" max="1" width="20" customWidth="1"/>"#));
        assert!(xml.contains(r#"<c r="A1" t="inlineStr"><is><t>host</t></is></c>"#));
        assert!(xml.contains(r#"<c r="B2"><v>0.0</v></c>"#));
        assert!(xml.contains(r#"<c r="C2" t="b"><v>1</v></c>"#));
        assert!(!xml.contains(r#"r="D2""#));
        assert!(xml.contains("a&lt;b"));
        assert!(xml.contains(r#"<c r="B3"><v>1e-12</v></c>"#));
        assert!(xml.contains(r#"<t xml:space="preserve"> x </t>"#));
        assert!(!xml.contains("mergeCell"));
        assert!(!xml.contains(r#"t="s""#));
        assert!(xml.contains("<pageMargins"));
    }

    #[test]
    fn test_replace_sheet_data_fills_empty_sheet() {
        let sheet = r#"<worksheet xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main"><sheetData/></worksheet>"#;
        let xml = replace_sheet_data(sheet, &table(&["lane"], &[&["3"]])).unwrap();
        assert!(xml.contains(r#"<row r="2"><c r="A2"><v>3.0</v></c></row></sheetData>"#));
    }

    #[test]
    fn test_replace_sheet_data_without_sheet_data_fails() {
        let sheet = r#"<worksheet xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main"/>"#;
        assert!(replace_sheet_data(sheet, &table(&["lane"], &[])).is_err());
    }

    fn sources() -> Vec<PivotSource<'static>> {
        vec![PivotSource {
            sheet: "raw prbs data",
            range: "A1:F11".to_string(),
            defined_name: "prbs_source",
        }]
    }

    #[test]
    fn test_retarget_pivot_cache_by_sheet() {
        let cache = r#"<pivotCacheDefinition xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main" refreshOnLoad="0" recordCount="2"><cacheSource type="worksheet"><worksheetSource ref="A1:C3" sheet="raw prbs data"/></cacheSource></pivotCacheDefinition>"#;

        let updated = retarget_pivot_cache(cache, &sources()).unwrap().unwrap();
        assert!(updated.contains(r#"<worksheetSource ref="A1:F11" sheet="raw prbs data"/>"#));
        assert!(updated.contains(r#"refreshOnLoad="1""#));
        assert!(updated.contains(r#"recordCount="2""#));
    }

    #[test]
    fn test_retarget_pivot_cache_by_defined_name() {
        let cache = r#"<pivotCacheDefinition xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main"><cacheSource type="worksheet"><worksheetSource name="prbs_source"/></cacheSource></pivotCacheDefinition>"#;

        let updated = retarget_pivot_cache(cache, &sources()).unwrap().unwrap();
        assert!(updated.contains(r#"<worksheetSource name="prbs_source"/>"#));
        assert!(updated.contains(r#"refreshOnLoad="1""#));
    }

    #[test]
    fn test_retarget_pivot_cache_other_sheet_is_untouched() {
        let cache = r#"<pivotCacheDefinition xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main"><cacheSource type="worksheet"><worksheetSource ref="A1:C3" sheet="lookup"/></cacheSource></pivotCacheDefinition>"#;
        assert!(retarget_pivot_cache(cache, &sources()).unwrap().is_none());
    }

    #[test]
    fn test_update_workbook_overwrites_and_adds_names() {
        let workbook = r#"<workbook xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main"><sheets><sheet name="raw data" sheetId="1" r:id="rId1"/></sheets><definedNames><definedName name="prbs_source">'raw prbs data'!$A$1:$B$2</definedName><definedName name="keep">Sheet1!$A$1</definedName></definedNames><calcPr calcId="124519"/></workbook>"#;
        let names = vec![
            ("prbs_source", "'raw prbs data'!$A$1:$F$11".to_string()),
            ("data_source", "'raw data'!$A$1:$C$4".to_string()),
        ];

        let xml = update_workbook(workbook, &names).unwrap();
        assert!(xml.contains("$A$1:$F$11"));
        assert!(!xml.contains("$A$1:$B$2"));
        assert!(xml.contains(r#"<definedName name="keep">Sheet1!$A$1</definedName>"#));
        assert!(xml.contains(r#"<definedName name="data_source">"#));
        assert!(xml.contains(r#"<calcPr calcId="124519" fullCalcOnLoad="1"/>"#));
        assert_eq!(xml.matches("<definedNames>").count(), 1);
    }

    #[test]
    fn test_update_workbook_creates_defined_names_before_calc_pr() {
        let workbook = r#"<workbook xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main"><sheets><sheet name="raw data" sheetId="1" r:id="rId1"/></sheets><calcPr calcId="124519" fullCalcOnLoad="0"/></workbook>"#;
        let names = vec![("data_source", "'raw data'!$A$1:$C$4".to_string())];

        let xml = update_workbook(workbook, &names).unwrap();
        let names_at = xml.find("<definedNames>").unwrap();
        let calc_at = xml.find("<calcPr").unwrap();
        assert!(names_at < calc_at);
        assert!(xml.contains(r#"fullCalcOnLoad="1""#));
        assert!(!xml.contains(r#"fullCalcOnLoad="0""#));
    }

    #[test]
    fn test_remove_elements() {
        let types = r#"<Types><Override PartName="/xl/calcChain.xml" ContentType="c"/><Override PartName="/xl/workbook.xml" ContentType="w"/></Types>"#;
        let xml = remove_elements(types, b"Override", b"PartName", |v| v == "/xl/calcChain.xml")
            .unwrap();
        assert!(!xml.contains("calcChain"));
        assert!(xml.contains("/xl/workbook.xml"));
    }
}
