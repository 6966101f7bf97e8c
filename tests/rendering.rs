use ez_pdf::style::{Alignment, Border};
use ez_pdf::{samples, CellSpec, DocumentOptions, Error, EzPdf, RowOptions};
use sha2::{Digest, Sha256};

fn render_sample_rows() -> EzPdf {
    let mut pdf = EzPdf::new(DocumentOptions::new().with_title("Sample rows"));
    pdf.add_page(None);

    let rows = RowOptions::default();
    pdf.add_one_cell_row("Hello, PDF!", &rows)
        .expect("one cell row");
    pdf.add_two_cell_row(
        [
            CellSpec::new("Left").with_align(Alignment::Left),
            CellSpec::new("Right").with_align(Alignment::Right),
        ],
        &rows,
    )
    .expect("two cell row");
    pdf.add_three_cell_row(
        [
            CellSpec::new("Filled").with_fill(true),
            CellSpec::new("Plain"),
            CellSpec::new("Plain"),
        ],
        &rows.with_border(Border::NONE).with_fill_color((195, 223, 236)),
    )
    .expect("three cell row");
    pdf
}

fn scrub_pdf(bytes: &[u8]) -> Vec<u8> {
    fn scrub_segment(data: &mut [u8], tag: &[u8], terminator: u8) {
        let mut index = 0;
        while index + tag.len() < data.len() {
            if data[index..].starts_with(tag) {
                let mut cursor = index + tag.len();
                while cursor < data.len() {
                    let byte = data[cursor];
                    if byte == terminator {
                        break;
                    }
                    if terminator == b')' {
                        data[cursor] = b'0';
                    } else if !matches!(byte, b'<' | b'>' | b' ' | b'\n' | b'\r' | b'\t') {
                        data[cursor] = b'0';
                    }
                    cursor += 1;
                }
                index = cursor;
            } else {
                index += 1;
            }
        }
    }

    fn scrub_xml(data: &mut [u8], start: &[u8], end: &[u8]) {
        let mut offset = 0;
        while offset + start.len() < data.len() {
            let Some(start_pos) = data[offset..]
                .windows(start.len())
                .position(|window| window == start)
            else {
                break;
            };
            let start_index = offset + start_pos + start.len();
            let Some(end_pos) = data[start_index..]
                .windows(end.len())
                .position(|window| window == end)
            else {
                break;
            };
            for byte in &mut data[start_index..start_index + end_pos] {
                if !matches!(*byte, b'<' | b'>' | b'/' | b' ' | b'\n' | b'\r' | b'\t') {
                    *byte = b'0';
                }
            }
            offset = start_index + end_pos + end.len();
        }
    }

    let mut normalized = bytes.to_vec();
    scrub_segment(&mut normalized, b"/CreationDate(", b')');
    scrub_segment(&mut normalized, b"/ModDate(", b')');
    scrub_segment(&mut normalized, b"/ID[", b']');
    scrub_segment(&mut normalized, b"/Producer(", b')');
    for tag in [
        "xmp:CreateDate",
        "xmp:ModifyDate",
        "xmp:MetadataDate",
        "xmpMM:DocumentID",
        "xmpMM:InstanceID",
        "xmpMM:VersionID",
    ] {
        let start = format!("<{}>", tag);
        let end = format!("</{}>", tag);
        scrub_xml(&mut normalized, start.as_bytes(), end.as_bytes());
    }
    normalized
}

fn normalized_hash(bytes: &[u8]) -> [u8; 32] {
    let normalized = scrub_pdf(bytes);
    Sha256::digest(&normalized).into()
}

#[test]
fn renders_non_empty_output() {
    let bytes = render_sample_rows().to_bytes().expect("serialize sample");
    assert!(
        bytes.starts_with(b"%PDF"),
        "rendered PDF should start with a PDF header"
    );
}

#[test]
fn rendering_is_deterministic() {
    let bytes_a = render_sample_rows().to_bytes().expect("serialize sample");
    let bytes_b = render_sample_rows().to_bytes().expect("serialize sample");

    assert_eq!(bytes_a.len(), bytes_b.len(), "PDF sizes should match");
    assert_eq!(
        normalized_hash(&bytes_a),
        normalized_hash(&bytes_b),
        "PDF renders must be deterministic after metadata normalization"
    );
}

#[test]
fn export_writes_the_document_to_disk() {
    let dir = tempfile::tempdir().expect("temporary directory");
    let path = dir.path().join("rows.pdf");

    render_sample_rows().export(&path).expect("export sample");

    let written = std::fs::read(&path).expect("read exported file");
    let in_memory = render_sample_rows().to_bytes().expect("serialize sample");
    assert_eq!(normalized_hash(&written), normalized_hash(&in_memory));
}

#[test]
fn export_to_missing_directory_reports_io_error() {
    let dir = tempfile::tempdir().expect("temporary directory");
    let path = dir.path().join("missing").join("rows.pdf");

    let err = render_sample_rows().export(&path).unwrap_err();
    assert!(matches!(err, Error::Io(_)), "unexpected error: {err}");
}

#[test]
fn invalid_widths_surface_a_descriptive_error() {
    let mut pdf = EzPdf::default();
    pdf.add_page(None);
    let err = pdf
        .add_three_cell_row(
            [
                CellSpec::new("a").with_width(0.5),
                CellSpec::new("b").with_width(0.25),
                CellSpec::new("c").with_width(0.5),
            ],
            &RowOptions::default(),
        )
        .unwrap_err();

    assert_eq!(
        err.to_string(),
        "Cell widths must add up to 1. Currently widths 0.5, 0.25 and 0.5 add up to 1.25"
    );
}

#[test]
fn showcase_is_written_with_overflow_pages() {
    let dir = tempfile::tempdir().expect("temporary directory");
    let path = dir.path().join("ez_pdf.pdf");

    let pages = samples::run(&path, DocumentOptions::default()).expect("render showcase");

    assert!(pages >= 3, "expected overflow and extra pages, got {pages}");
    let metadata = std::fs::metadata(&path).expect("showcase file");
    assert!(metadata.len() > 0);
}
