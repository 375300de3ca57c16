mod swap_search;
