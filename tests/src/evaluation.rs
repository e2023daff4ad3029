mod integration;
mod oracle;
