mod records;
mod projects;
mod site;
mod validation;
