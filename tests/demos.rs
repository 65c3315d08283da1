use pseudocod::interpreter::io::BufferedIo;
use walkdir::WalkDir;

#[test]
fn demo_programs_work() {
    let mut count = 0;

    for entry in
        WalkDir::new("demos").into_iter()
                             .filter_map(Result::ok)
                             .filter(|e| e.path().extension().is_some_and(|ext| ext == "pseudo"))
    {
        let path = entry.path();
        let source =
            std::fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        count += 1;
        let mut io = BufferedIo::new("");
        if let Err(e) = pseudocod::run(&source, &mut io) {
            panic!("Demo {path:?} failed:\n{source}\nError: {e}");
        }
        assert!(!io.output().is_empty(), "Demo {path:?} produced no output");
    }

    assert!(count > 0, "No demo programs found in demos/");
}
