mod swap;
