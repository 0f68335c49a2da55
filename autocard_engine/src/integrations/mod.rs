mod nsgifts;
