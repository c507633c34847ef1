fn main() {
    divan::main();
}

fn full_payload() -> String {
    let skills = (0..decoder::feed::SKILLS.len()).map(|index| format!("{},{},{}", index + 1, 99, index * 14000));
    let activities = (0..decoder::feed::ACTIVITIES.len()).map(|index| format!("{},{}", index + 1, index * 10));

    skills.chain(activities).collect::<Vec<_>>().join("\n")
}

#[divan::bench]
fn parse(bencher: divan::Bencher) {
    let payload = full_payload();

    bencher.bench(|| decoder::feed::parse(divan::black_box(&payload)));
}

#[divan::bench]
fn pvm_totals(bencher: divan::Bencher) {
    let payload = full_payload();
    let snapshot = decoder::feed::parse(&payload).unwrap();

    bencher.bench(|| decoder::categories::pvm_totals(divan::black_box(&snapshot.activities)));
}
