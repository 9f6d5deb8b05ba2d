#![allow(non_snake_case)]

use densemat::{algebra::*, engine::*, io::ConfigurablePrintTarget};

fn test_print_engine() -> MatrixEngine {
    let settings = EngineSettingsBuilder::default()
        .verbose(true)
        .build()
        .unwrap();
    MatrixEngine::new(settings).unwrap()
}

fn test_print_run(engine: &mut MatrixEngine) {
    let A = Matrix::from(&[[2., 1.], [1., 3.]]);
    engine.inverse(&A).unwrap();
}

#[test]
fn test_print_to_stdout() {
    let mut engine = test_print_engine();
    engine.print_to_stdout();
    test_print_run(&mut engine);
}

#[test]
fn test_print_to_buffer() {
    let mut engine = test_print_engine();
    engine.print_to_buffer();
    test_print_run(&mut engine);
    let result = engine.get_print_buffer().unwrap();
    assert!(result.contains("inverse"));
}

#[test]
fn test_print_to_file() {
    use std::io::{Read, Seek};

    let mut engine = test_print_engine();
    let file = tempfile::NamedTempFile::new().unwrap();
    let mut file2 = file.reopen().unwrap();
    engine.print_to_file(file.into_file());
    test_print_run(&mut engine);

    file2.seek(std::io::SeekFrom::Start(0)).unwrap();
    let mut result = String::new();
    file2.read_to_string(&mut result).unwrap();
    assert!(result.contains("inverse"));
}

#[test]
fn test_print_to_stream() {
    use std::io::{Read, Seek};

    let mut engine = test_print_engine();
    let file = tempfile::NamedTempFile::new().unwrap();
    let mut file2 = file.reopen().unwrap();
    let stream = Box::new(file.into_file());

    engine.print_to_stream(stream);
    test_print_run(&mut engine);
    engine.print_timers().unwrap();

    file2.seek(std::io::SeekFrom::Start(0)).unwrap();
    let mut result = String::new();
    file2.read_to_string(&mut result).unwrap();
    assert!(result.contains("inverse"));
    assert!(result.contains("timings:"));
}

#[test]
fn test_print_to_sink() {
    let mut engine = test_print_engine();
    engine.print_to_sink();
    test_print_run(&mut engine);
    // no output
    assert!(engine.get_print_buffer().is_err());
}
