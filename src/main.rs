fn main() {
    kokoro::term::main();
}
