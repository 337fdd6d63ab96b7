fn main() {
    coursegraph::cli::run();
}
