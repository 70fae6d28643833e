use aws_lambda_events::event::s3::{S3Event, S3EventRecord};
use lambda_runtime::{tracing, Error, LambdaEvent};
use std::io::{self, Write};

/// Bucket name and object key of a record. Absent values read as empty.
fn upload_of(record: &S3EventRecord) -> (&str, &str) {
    let bucket = record.s3.bucket.name.as_deref().unwrap_or_default();
    let key = record.s3.object.key.as_deref().unwrap_or_default();
    (bucket, key)
}

/// Writes the batch announcement followed by one three-line block per record,
/// in the order the records were delivered. Keys are written as received,
/// without URL-decoding.
pub(crate) fn write_report<W: Write>(out: &mut W, event: &S3Event) -> io::Result<()> {
    writeln!(out, "S3 Event: {event:?}")?;

    for record in &event.records {
        let (bucket, key) = upload_of(record);
        writeln!(out, "File upload detected!")?;
        writeln!(out, "Bucket: {bucket}")?;
        writeln!(out, "Key: {key}")?;
    }

    Ok(())
}

/// Reports the batch to `out`. The summary event is emitted at DEBUG so that
/// at the default level the stream carries the report lines alone.
fn handle<W: Write>(out: &mut W, event: LambdaEvent<S3Event>) -> Result<(), Error> {
    let LambdaEvent { payload, .. } = event;

    write_report(out, &payload)?;

    tracing::debug!(records = payload.records.len(), "S3 event reported");
    Ok(())
}

/// Logs every object-created record of the notification to stdout.
///
/// The invocation context is accepted to satisfy the runtime's signature but
/// its deadline is not consulted; a batch is always reported in full. The
/// only failure is stdout itself being unwritable.
pub(crate) async fn function_handler(event: LambdaEvent<S3Event>) -> Result<(), Error> {
    handle(&mut io::stdout().lock(), event)
}
