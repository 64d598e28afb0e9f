// benches/scan.rs
use criterion::{criterion_group, criterion_main, Criterion, black_box};

use placecount::{
    aliases::AliasTable,
    scan::{self, Document, ScanTables},
};

/// Synthetic chapter: filler prose with place names sprinkled in.
fn sample_text() -> String {
    let filler = "话说那人一路行来，见得山明水秀，不觉心中欢喜。\n";
    let places = ["金陵", "姑苏", "西湖", "京师", "扬州", "大明湖", "吴兴", "京京"];
    let mut out = String::new();
    for i in 0..2_000 {
        out.push_str(filler);
        out.push_str(places[i % places.len()]);
    }
    out
}

fn bench_scan(c: &mut Criterion) {
    let doc = Document::new("bench.txt", sample_text());
    let table = AliasTable::default();

    c.bench_function("scan_document", |b| {
        b.iter(|| {
            let mut tables = ScanTables::default();
            let hits = scan::scan_document(black_box(&doc), black_box(&table), &mut tables);
            black_box((hits, tables.excerpts.len()))
        })
    });

    c.bench_function("find_overlapping", |b| {
        b.iter(|| black_box(scan::find_overlapping(black_box(&doc.text), "京").count()))
    });
}

criterion_group!(benches, bench_scan);
criterion_main!(benches);
