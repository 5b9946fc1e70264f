mod imports_tests;
mod properties_tests;
