use chrono::{NaiveDate, TimeZone, Utc};
use pdf_paginate::layout::WriterConfig;
use pdf_paginate::template::{Answers, DocumentTemplate, BLANK};
use pdf_paginate::{suggested_filename, DocError, Document, FontFamily, Info};

fn contains(haystack: &[u8], needle: &[u8]) -> bool {
    haystack.windows(needle.len()).any(|w| w == needle)
}

fn bill_of_sale() -> DocumentTemplate {
    DocumentTemplate::new("bill_of_sale", "BILL OF SALE")
        .section(
            "1. Parties",
            "The Seller, {seller}, of {seller_state}, sells to the Buyer, {buyer}.",
        )
        .section("2. Price", "The purchase price is {price}, paid on {sale_date}.")
        .section("3. Terms", lipsum::lipsum(900))
        .section("", "Seller signature: {seller_signature:24}")
}

#[test]
fn filled_template_exports_to_pdf() {
    let _ = env_logger::builder().is_test(true).try_init();

    let mut answers = Answers::new();
    answers
        .set("seller", "Ada Lovelace")
        .set("buyer", "Charles Babbage")
        .set_amount("price", 1_250_000)
        .set_date("sale_date", NaiveDate::from_ymd_opt(2024, 5, 1).unwrap());

    let template = bill_of_sale();
    assert_eq!(
        template.missing_fields(&answers).unwrap(),
        vec!["seller_state", "seller_signature"]
    );

    let config = WriterConfig::legal_a4();
    let family = FontFamily::Helvetica;
    let pages = template.render(&answers, config.clone(), family).unwrap();
    assert!(pages.len() > 1);

    let parties = &pages[0].fragments[2].text;
    assert!(parties.starts_with("The Seller, Ada Lovelace, of"), "{parties}");
    assert!(pages[0].lines().any(|l| l.contains("$12,500.00")));
    assert!(pages[0].lines().any(|l| l.contains(BLANK)));

    let mut doc = Document::for_config(&config, family);
    doc.set_info(
        Info::new()
            .title("Bill of Sale")
            .author("Ada Lovelace")
            .created(Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap().fixed_offset())
            .clone(),
    );
    doc.compress = false;
    let page_count = pages.len();
    doc.add_pages(pages);

    let mut out: Vec<u8> = Vec::new();
    doc.write(&mut out).unwrap();

    assert!(out.starts_with(b"%PDF-"));
    assert!(contains(&out, b"/Helvetica-Bold"));
    assert!(contains(&out, format!("/Count {page_count}").as_bytes()));
    assert!(contains(&out, b"(BILL OF SALE) Tj"));
    assert!(contains(&out, b"(Bill of Sale)"));
}

#[test]
fn compressed_output_is_smaller() {
    let answers = Answers::new();
    let config = WriterConfig::legal_a4();
    let pages = bill_of_sale()
        .render(&answers, config.clone(), FontFamily::Courier)
        .unwrap();

    let mut plain = Document::for_config(&config, FontFamily::Courier);
    plain.compress = false;
    plain.add_pages(pages.clone());

    let mut packed = Document::for_config(&config, FontFamily::Courier);
    packed.add_pages(pages);

    let plain = plain.to_bytes().unwrap();
    let packed = packed.to_bytes().unwrap();
    assert!(packed.len() < plain.len());
    assert!(contains(&packed, b"/FlateDecode"));
}

#[test]
fn empty_document_cannot_be_written() {
    let doc = Document::for_config(&WriterConfig::legal_a4(), FontFamily::Helvetica);
    let mut out: Vec<u8> = Vec::new();
    assert!(matches!(doc.write(&mut out), Err(DocError::NoPages)));
    assert!(out.is_empty());
}

#[test]
fn filename_follows_document_kind() {
    let at = NaiveDate::from_ymd_opt(2025, 12, 31)
        .unwrap()
        .and_hms_opt(23, 59, 1)
        .unwrap();
    assert_eq!(
        suggested_filename(&bill_of_sale().kind, at),
        "bill_of_sale_20251231_235901.pdf"
    );
}
