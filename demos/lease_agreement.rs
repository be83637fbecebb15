use chrono::NaiveDate;
use pdf_paginate::layout::WriterConfig;
use pdf_paginate::template::{Answers, DocumentTemplate};
use pdf_paginate::{suggested_filename_now, Document, FontFamily, Info};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    // the template is plain data: one entry per numbered clause
    let lease = DocumentTemplate::new("lease_agreement", "RESIDENTIAL LEASE AGREEMENT")
        .section(
            "1. Parties",
            "This Residential Lease Agreement is entered into on {agreement_date} between \
             {landlord_name} (\"Landlord\") and {tenant_name} (\"Tenant\").",
        )
        .section(
            "2. Premises",
            "Landlord leases to Tenant the residential premises located at {property_address}, \
             {property_city}, {property_state} (the \"Premises\").",
        )
        .section(
            "3. Term",
            "The lease begins on {start_date} and ends on {end_date}. Tenant shall vacate the \
             Premises at the end of the term unless the lease is renewed in writing.",
        )
        .section(
            "4. Rent",
            "Tenant shall pay monthly rent of {monthly_rent}, due on the {rent_due_day:6} day of \
             each month. Rent received more than five days late incurs a fee of {late_fee}.",
        )
        .section(
            "5. Security Deposit",
            "On signing, Tenant shall pay a security deposit of {security_deposit}. The deposit \
             will be returned within thirty days of the end of the lease, less any lawful \
             deductions.\nThe deposit may not be applied to the last month's rent.",
        )
        .section("6. Governing Law", "This lease is governed by the laws of {governing_state}.")
        .section(
            "",
            "Landlord: {landlord_name:32}\n\nTenant: {tenant_name:32}\n\nDate: {signature_date:20}",
        );

    let mut answers = Answers::new();
    answers
        .set("landlord_name", "Jane Doe")
        .set("tenant_name", "Sam Roe")
        .set("property_address", "12 Harbour Street")
        .set("property_city", "Portland")
        .set("property_state", "Maine")
        .set("governing_state", "Maine")
        .set_date("agreement_date", NaiveDate::from_ymd_opt(2024, 3, 1).unwrap_or_default())
        .set_date("start_date", NaiveDate::from_ymd_opt(2024, 4, 1).unwrap_or_default())
        .set_amount("monthly_rent", 185_000)
        .set_amount("security_deposit", 185_000);

    for field in lease.missing_fields(&answers)? {
        println!("unanswered: {field}");
    }

    let config = WriterConfig::legal_a4();
    let family = FontFamily::Helvetica;
    let pages = lease.render(&answers, config.clone(), family)?;

    let mut doc = Document::for_config(&config, family);
    doc.set_info(
        Info::new()
            .title("Residential Lease Agreement")
            .subject("Lease between Jane Doe and Sam Roe")
            .clone(),
    );
    doc.add_pages(pages);

    let filename = suggested_filename_now(&lease.kind);
    let out = std::fs::File::create(&filename)?;
    doc.write(out)?;
    println!("wrote {filename}");

    Ok(())
}
