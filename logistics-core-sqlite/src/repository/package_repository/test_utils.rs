use logistics_core_db::models::package::PackageModel;

pub fn create_test_package(description: &str) -> PackageModel {
    PackageModel::new_registered(description.to_string())
}
